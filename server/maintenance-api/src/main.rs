//! Binary entrypoint for the maintenance query service.

use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use maintenance_api::{AppState, InMemoryCatalog, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::registry()
    .with(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "maintenance_api=info,prediction_engine=info,tower_http=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = ServiceConfig::from_env()?;
  let catalog = InMemoryCatalog::load(&config.catalog_path)?;
  let state = Arc::new(AppState::new(Arc::new(catalog)));

  let app = maintenance_api::router(state)
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive());

  let addr = config.socket_addr();
  tracing::info!("maintenance-api listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
