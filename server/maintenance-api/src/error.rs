//! Error types for the query service.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use prediction_engine::EngineError;
use serde_json::json;
use thiserror::Error;

/// Request-level failures, rendered as JSON bodies.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  NotFound(String),

  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  #[error("internal: {0}")]
  Internal(String),
}

impl From<EngineError> for ApiError {
  fn from(err: EngineError) -> Self {
    match err {
      EngineError::Validation { field, reason } => Self::Validation { field, reason },
      other => Self::Internal(other.to_string()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, body) = match &self {
      ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
      ApiError::Validation { field, reason } => {
        tracing::warn!(field = %field, "invalid product record: {}", reason);
        (
          StatusCode::UNPROCESSABLE_ENTITY,
          json!({ "error": reason, "field": field }),
        )
      }
      ApiError::Internal(msg) => {
        tracing::error!("internal error: {}", msg);
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          json!({ "error": "Internal server error" }),
        )
      }
    };
    (status, Json(body)).into_response()
  }
}

/// Startup failures: configuration and catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("read {path}: {source}")]
  Read {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("parse catalog: {0}")]
  Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("{var}: invalid value {value:?}")]
  Invalid { var: &'static str, value: String },
}
