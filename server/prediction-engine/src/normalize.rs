//! Validate inbound records into canonical internal models.

use crate::date::parse_timestamp;
use crate::error::EngineError;
use crate::types::*;

/// Parse and validate an InboundProduct into a canonical Product.
pub fn normalize_product(raw: &InboundProduct) -> Result<Product, EngineError> {
  let name = match raw.name.as_deref().map(str::trim) {
    Some(n) if !n.is_empty() => n.to_string(),
    Some(_) => return Err(EngineError::validation("name", "must not be empty")),
    None => return Err(EngineError::validation("name", "is required")),
  };

  let hours = raw
    .total_hours_run
    .ok_or_else(|| EngineError::validation("totalHoursRun", "is required"))?;
  let total_hours_run = u32::try_from(hours)
    .map_err(|_| EngineError::validation("totalHoursRun", "must be a non-negative integer"))?;

  let install_raw = raw
    .install_date
    .as_deref()
    .ok_or_else(|| EngineError::validation("installDate", "is required"))?;
  let install_date = parse_timestamp(install_raw)
    .ok_or_else(|| EngineError::validation("installDate", &format!("invalid timestamp: {}", install_raw)))?;

  // Blank is treated the same as absent ("never serviced").
  let last_service_date = match raw.last_service_date.as_deref().map(str::trim) {
    Some(s) if !s.is_empty() => Some(parse_timestamp(s).ok_or_else(|| {
      EngineError::validation("lastServiceDate", &format!("invalid timestamp: {}", s))
    })?),
    _ => None,
  };

  Ok(Product {
    name,
    total_hours_run,
    install_date,
    last_service_date,
  })
}

/// Parse and validate an InboundRecommendation.
pub fn normalize_recommendation(
  raw: &InboundRecommendation,
) -> Result<MaintenanceRecommendation, EngineError> {
  let maintenance_type = MaintenanceType::from_str_loose(&raw.maintenance_type).ok_or_else(|| {
    EngineError::validation(
      "maintenanceType",
      "expected Initial|Routine|Long Term|Special Consideration",
    )
  })?;

  Ok(MaintenanceRecommendation {
    product_type: raw.product_type.clone(),
    maintenance_type,
    hours_interval: raw.hours_interval,
  })
}

/// Validate a full request. Only the product can fail; recommendations with an
/// unrecognised maintenance type are skipped.
pub fn normalize_request(
  raw: &PredictionRequest,
) -> Result<(Product, Vec<MaintenanceRecommendation>), EngineError> {
  let product = normalize_product(&raw.product)?;
  let recommendations = raw
    .recommendations
    .iter()
    .filter_map(|rec| match normalize_recommendation(rec) {
      Ok(r) => Some(r),
      Err(e) => {
        tracing::warn!(
          id = rec.id.as_deref().unwrap_or("-"),
          maintenance_type = %rec.maintenance_type,
          "skipping recommendation: {}",
          e
        );
        None
      }
    })
    .collect();
  Ok((product, recommendations))
}
