//! HTTP handlers for the query service.

use axum::{
  extract::{Path, State},
  Json,
};
use prediction_engine::{InboundRecommendation, PredictionReport, PredictionRequest};
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::ProductRecord;

const PRODUCT_NOT_FOUND: &str = "Product not found";

pub async fn health() -> &'static str {
  "ok"
}

pub async fn list_products(State(state): State<Arc<AppState>>) -> Json<Vec<ProductRecord>> {
  Json(state.catalog.products())
}

pub async fn get_product(
  State(state): State<Arc<AppState>>,
  Path(product_id): Path<String>,
) -> Result<Json<ProductRecord>, ApiError> {
  find_product(&state, &product_id).map(Json)
}

pub async fn get_recommendations(
  State(state): State<Arc<AppState>>,
  Path(product_id): Path<String>,
) -> Result<Json<Vec<InboundRecommendation>>, ApiError> {
  let product = find_product(&state, &product_id)?;
  Ok(Json(state.catalog.recommendations_for(&product.product_type)))
}

pub async fn predict(
  State(state): State<Arc<AppState>>,
  Path(product_id): Path<String>,
) -> Result<Json<PredictionReport>, ApiError> {
  let product = find_product(&state, &product_id)?;
  let request = PredictionRequest {
    product: product.to_inbound(),
    recommendations: state.catalog.recommendations_for(&product.product_type),
  };
  let report = state.engine.process(&request)?;
  tracing::debug!(product_id = %product_id, status = report.status.as_str(), "predicted");
  Ok(Json(report))
}

fn find_product(state: &AppState, product_id: &str) -> Result<ProductRecord, ApiError> {
  state
    .catalog
    .product(product_id)
    .ok_or_else(|| ApiError::NotFound(PRODUCT_NOT_FOUND.to_string()))
}
