//! Catalog record types (JSON contract with the seed file and API clients).

use prediction_engine::{InboundProduct, InboundRecommendation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored product. The engine's inputs are typed; every other field
/// (location, usage, metrics, maintenance history, owner, ...) is kept in
/// `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
  pub id: String,
  #[serde(default)]
  pub serial_number: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(rename = "type")]
  pub product_type: String,
  #[serde(default)]
  pub manufacturer: String,
  #[serde(default)]
  pub model: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub install_date: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub total_hours_run: Option<i64>,
  #[serde(default)]
  pub status: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub contractor_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_service_date: Option<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl ProductRecord {
  /// The fields the prediction engine reads.
  pub fn to_inbound(&self) -> InboundProduct {
    InboundProduct {
      name: self.name.clone(),
      total_hours_run: self.total_hours_run,
      install_date: self.install_date.clone(),
      last_service_date: self.last_service_date.clone(),
    }
  }
}

/// Seed file layout: `{"products": [...], "maintenanceRecommendations": [...]}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSeed {
  #[serde(default)]
  pub products: Vec<ProductRecord>,
  #[serde(default)]
  pub maintenance_recommendations: Vec<InboundRecommendation>,
}
