//! Core types for the prediction engine (JSON contracts + internal models).

use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// One prediction request: a product plus the recommendations for its type.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRequest {
  pub product: InboundProduct,
  #[serde(default)]
  pub recommendations: Vec<InboundRecommendation>,
}

/// Product fields the engine reads. Unknown fields are silently ignored.
///
/// Required fields are optional here so that a missing one is reported as a
/// validation error naming the field rather than a generic JSON error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundProduct {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub total_hours_run: Option<i64>,
  #[serde(default)]
  pub install_date: Option<String>,
  #[serde(default)]
  pub last_service_date: Option<String>,
}

/// A manufacturer maintenance recommendation, as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundRecommendation {
  #[serde(default)]
  pub id: Option<String>,
  pub product_type: String,
  pub maintenance_type: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub interval_description: Option<String>,
  #[serde(default)]
  pub hours_interval: Option<i64>,
  /// Calendar interval in months.
  #[serde(default)]
  pub time_interval: Option<i64>,
}

// ---------------------------------------------------------------------------
// Maintenance type (normalized)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaintenanceType {
  Initial,
  Routine,
  #[serde(rename = "Long Term")]
  LongTerm,
  #[serde(rename = "Special Consideration")]
  SpecialConsideration,
}

impl MaintenanceType {
  pub fn from_str_loose(s: &str) -> Option<Self> {
    let key: String = s
      .chars()
      .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
      .collect::<String>()
      .to_ascii_lowercase();
    match key.as_str() {
      "initial" => Some(Self::Initial),
      "routine" => Some(Self::Routine),
      "longterm" => Some(Self::LongTerm),
      "specialconsideration" | "special" => Some(Self::SpecialConsideration),
      _ => None,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Initial => "Initial",
      Self::Routine => "Routine",
      Self::LongTerm => "Long Term",
      Self::SpecialConsideration => "Special Consideration",
    }
  }
}

// ---------------------------------------------------------------------------
// Internal normalized types
// ---------------------------------------------------------------------------

/// Canonical product after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
  pub name: String,
  pub total_hours_run: u32,
  pub install_date: DateTime<Utc>,
  pub last_service_date: Option<DateTime<Utc>>,
}

/// Canonical recommendation after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceRecommendation {
  pub product_type: String,
  pub maintenance_type: MaintenanceType,
  /// Raw interval; non-positive values are treated as absent by the engine.
  pub hours_interval: Option<i64>,
}

// ---------------------------------------------------------------------------
// Health status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
  Healthy,
  Warning,
  Critical,
  #[serde(rename = "No maintenance data available")]
  NoMaintenanceData,
}

impl HealthStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Healthy => "Healthy",
      Self::Warning => "Warning",
      Self::Critical => "Critical",
      Self::NoMaintenanceData => "No maintenance data available",
    }
  }

  pub fn is_healthy(self) -> bool {
    self == Self::Healthy
  }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
  #[serde(rename = "Overall System")]
  OverallSystem,
  Engine,
  #[serde(rename = "Filter System")]
  FilterSystem,
}

impl Component {
  /// Report order.
  pub const ALL: [Component; 3] = [Self::OverallSystem, Self::Engine, Self::FilterSystem];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::OverallSystem => "Overall System",
      Self::Engine => "Engine",
      Self::FilterSystem => "Filter System",
    }
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentPrediction {
  pub component: Component,
  /// Not clamped to 0..=100.
  pub health_score: f64,
  pub maintenance_recommendation: String,
  pub potential_issues: Vec<String>,
}

/// Serialized by hand: a no-data report carries only `status` and `predictions`,
/// every other report carries all five fields (`warningMessage` may be null).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReport {
  pub status: HealthStatus,
  #[serde(default)]
  pub hours_until_maintenance: Option<u32>,
  #[serde(default)]
  pub next_maintenance_date: Option<DateTime<Utc>>,
  #[serde(default)]
  pub warning_message: Option<String>,
  pub predictions: Vec<ComponentPrediction>,
}

impl Serialize for PredictionReport {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let no_data = self.status == HealthStatus::NoMaintenanceData;
    let mut state = serializer.serialize_struct("PredictionReport", if no_data { 2 } else { 5 })?;
    state.serialize_field("status", &self.status)?;
    if no_data {
      state.skip_field("hoursUntilMaintenance")?;
      state.skip_field("nextMaintenanceDate")?;
      state.skip_field("warningMessage")?;
    } else {
      state.serialize_field("hoursUntilMaintenance", &self.hours_until_maintenance)?;
      state.serialize_field("nextMaintenanceDate", &self.next_maintenance_date)?;
      state.serialize_field("warningMessage", &self.warning_message)?;
    }
    state.serialize_field("predictions", &self.predictions)?;
    state.end()
  }
}

impl PredictionReport {
  /// Terminal report when no routine recommendation applies.
  pub fn no_maintenance_data() -> Self {
    Self {
      status: HealthStatus::NoMaintenanceData,
      hours_until_maintenance: None,
      next_maintenance_date: None,
      warning_message: None,
      predictions: Vec::new(),
    }
  }
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
