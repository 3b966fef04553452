//! Equipment Maintenance Query Service
//!
//! Read-only HTTP service over the product/recommendation catalog; runs the
//! prediction engine per product. Bind to 127.0.0.1 by default (internal only).

pub mod catalog;
pub mod config;
pub mod error;
mod handlers;
mod state;
pub mod types;

use axum::{routing::get, Router};
use std::sync::Arc;

pub use catalog::{Catalog, InMemoryCatalog};
pub use config::ServiceConfig;
pub use error::ApiError;
pub use handlers::{get_product, get_recommendations, health, list_products, predict};
pub use state::AppState;

/// All routes, without transport layers.
pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/api/products", get(list_products))
    .route("/api/products/:id", get(get_product))
    .route("/api/products/:id/recommendations", get(get_recommendations))
    .route("/api/predict/:id", get(predict))
    .with_state(state)
}
