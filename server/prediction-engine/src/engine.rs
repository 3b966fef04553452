//! Core engine: selects the routine recommendation and assembles the prediction report.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::components;
use crate::config::Config;
use crate::error::EngineError;
use crate::health;
use crate::normalize;
use crate::types::*;
use crate::variability::Variability;

/// The maintenance prediction engine. Holds only configuration; every call is independent.
#[derive(Debug, Clone)]
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Validate a raw request and predict against the wall clock.
  pub fn process(&self, raw: &PredictionRequest) -> Result<PredictionReport, EngineError> {
    let (product, recommendations) = normalize::normalize_request(raw)?;
    Ok(self.predict(&product, &recommendations))
  }

  /// Predict using the current time and the thread-local random generator.
  pub fn predict(
    &self,
    product: &Product,
    recommendations: &[MaintenanceRecommendation],
  ) -> PredictionReport {
    self.predict_at(product, recommendations, Utc::now(), &mut rand::thread_rng())
  }

  /// Predict at a fixed instant with a caller-supplied random source.
  pub fn predict_at<R: Rng + ?Sized>(
    &self,
    product: &Product,
    recommendations: &[MaintenanceRecommendation],
    now: DateTime<Utc>,
    rng: &mut R,
  ) -> PredictionReport {
    match self.classify(product, recommendations, now) {
      Some((hours_remaining, status)) => {
        let impacts = Variability::draw(status, rng);
        self.assemble_report(product, hours_remaining, status, impacts, now)
      }
      None => PredictionReport::no_maintenance_data(),
    }
  }

  /// Assemble a report from already-drawn impacts. Fully deterministic.
  pub fn predict_with_impacts(
    &self,
    product: &Product,
    recommendations: &[MaintenanceRecommendation],
    now: DateTime<Utc>,
    impacts: Variability,
  ) -> PredictionReport {
    match self.classify(product, recommendations, now) {
      Some((hours_remaining, status)) => {
        self.assemble_report(product, hours_remaining, status, impacts, now)
      }
      None => PredictionReport::no_maintenance_data(),
    }
  }

  /// Hours remaining and health status, or None without a routine recommendation.
  fn classify(
    &self,
    product: &Product,
    recommendations: &[MaintenanceRecommendation],
    now: DateTime<Utc>,
  ) -> Option<(u32, HealthStatus)> {
    let Some(routine) = find_routine(recommendations) else {
      tracing::debug!(product = %product.name, "no routine recommendation");
      return None;
    };

    let interval = effective_interval(routine.hours_interval, &self.config);
    let hours_remaining = hours_until_maintenance(product.total_hours_run, interval);
    let status = health::classify_health(product, hours_remaining, now, &self.config);
    Some((hours_remaining, status))
  }

  fn assemble_report(
    &self,
    product: &Product,
    hours_remaining: u32,
    status: HealthStatus,
    impacts: Variability,
    now: DateTime<Utc>,
  ) -> PredictionReport {
    // One run-hour is assumed to take one calendar day.
    let next_maintenance_date = now + Duration::days(i64::from(hours_remaining));
    let warning_message = warning_message(status, &product.name, hours_remaining, &self.config);
    let predictions = components::build_components(
      status,
      hours_remaining,
      product.total_hours_run,
      impacts,
      &self.config,
    );

    tracing::debug!(
      product = %product.name,
      status = status.as_str(),
      hours_remaining,
      "prediction computed"
    );

    PredictionReport {
      status,
      hours_until_maintenance: Some(hours_remaining),
      next_maintenance_date: Some(next_maintenance_date),
      warning_message,
      predictions,
    }
  }
}

/// First recommendation of type Routine, if any.
pub fn find_routine(recommendations: &[MaintenanceRecommendation]) -> Option<&MaintenanceRecommendation> {
  recommendations
    .iter()
    .find(|r| r.maintenance_type == MaintenanceType::Routine)
}

/// Interval in run-hours. Absent, zero or negative values fall back to the default;
/// values beyond `u32::MAX` saturate.
pub fn effective_interval(hours_interval: Option<i64>, config: &Config) -> u32 {
  hours_interval
    .filter(|&h| h > 0)
    .map(|h| u32::try_from(h).unwrap_or(u32::MAX))
    .unwrap_or(config.default_hours_interval)
    .max(1)
}

/// Hours until the next routine service. A unit sitting exactly on a boundary
/// has a full interval ahead of it, never zero.
pub fn hours_until_maintenance(total_hours_run: u32, interval: u32) -> u32 {
  interval - (total_hours_run % interval)
}

/// Warning text for the report, by priority: Critical, Warning, then an upcoming-service notice.
pub fn warning_message(
  status: HealthStatus,
  name: &str,
  hours_remaining: u32,
  config: &Config,
) -> Option<String> {
  match status {
    HealthStatus::Critical => Some(format!(
      "URGENT: {} requires immediate maintenance! System at risk of failure.",
      name
    )),
    HealthStatus::Warning => Some(format!(
      "ATTENTION: {} is showing signs of degradation. Schedule maintenance soon.",
      name
    )),
    _ if hours_remaining < config.notification_hours => Some(format!(
      "NOTIFICATION: {} will need routine maintenance in {} hours.",
      name, hours_remaining
    )),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
  }

  fn product(hours: u32, serviced_days_ago: Option<i64>) -> Product {
    Product {
      name: "Standby Gen".into(),
      total_hours_run: hours,
      install_date: now() - Duration::days(1000),
      last_service_date: serviced_days_ago.map(|d| now() - Duration::days(d)),
    }
  }

  fn rec(kind: MaintenanceType, hours_interval: Option<i64>) -> MaintenanceRecommendation {
    MaintenanceRecommendation {
      product_type: "Home Standby Generator".into(),
      maintenance_type: kind,
      hours_interval,
    }
  }

  #[test]
  fn no_routine_short_circuits() {
    let engine = Engine::with_defaults();
    let recs = vec![
      rec(MaintenanceType::Initial, Some(25)),
      rec(MaintenanceType::LongTerm, Some(400)),
    ];
    let report = engine.predict_at(&product(500, Some(400)), &recs, now(), &mut StdRng::seed_from_u64(1));
    assert_eq!(report, PredictionReport::no_maintenance_data());
  }

  #[test]
  fn first_routine_wins() {
    let engine = Engine::with_defaults();
    let recs = vec![
      rec(MaintenanceType::Initial, Some(25)),
      rec(MaintenanceType::Routine, Some(200)),
      rec(MaintenanceType::Routine, Some(30)),
    ];
    let report = engine.predict_with_impacts(&product(150, Some(10)), &recs, now(), Variability::default());
    assert_eq!(report.hours_until_maintenance, Some(50));
  }

  #[test]
  fn hours_remaining_boundaries() {
    assert_eq!(hours_until_maintenance(0, 100), 100);
    assert_eq!(hours_until_maintenance(400, 100), 100);
    assert_eq!(hours_until_maintenance(401, 100), 99);
    assert_eq!(hours_until_maintenance(499, 100), 1);
    for hours in 0..1000 {
      let r = hours_until_maintenance(hours, 37);
      assert!(r >= 1 && r <= 37);
    }
  }

  #[test]
  fn non_positive_interval_defaults() {
    let config = Config::default();
    assert_eq!(effective_interval(None, &config), 100);
    assert_eq!(effective_interval(Some(0), &config), 100);
    assert_eq!(effective_interval(Some(-20), &config), 100);
    assert_eq!(effective_interval(Some(i64::MAX), &config), u32::MAX);
    assert_eq!(effective_interval(Some(i64::MIN), &config), 100);
    assert_eq!(effective_interval(Some(200), &config), 200);
  }

  #[test]
  fn next_date_is_hours_as_days() {
    let engine = Engine::with_defaults();
    let recs = vec![rec(MaintenanceType::Routine, Some(100))];
    let report = engine.predict_with_impacts(&product(30, Some(5)), &recs, now(), Variability::default());
    assert_eq!(report.hours_until_maintenance, Some(70));
    assert_eq!(report.next_maintenance_date, Some(now() + Duration::days(70)));
  }

  #[test]
  fn warning_message_priority() {
    let config = Config::default();
    let critical = warning_message(HealthStatus::Critical, "Pump", 10, &config).unwrap();
    assert!(critical.starts_with("URGENT: Pump"));
    let warning = warning_message(HealthStatus::Warning, "Pump", 10, &config).unwrap();
    assert!(warning.starts_with("ATTENTION: Pump"));
    assert_eq!(
      warning_message(HealthStatus::Healthy, "Pump", 49, &config).as_deref(),
      Some("NOTIFICATION: Pump will need routine maintenance in 49 hours.")
    );
    assert_eq!(warning_message(HealthStatus::Healthy, "Pump", 50, &config), None);
  }

  #[test]
  fn critical_scenario() {
    let engine = Engine::with_defaults();
    let recs = vec![rec(MaintenanceType::Routine, Some(100))];
    let report = engine.predict_at(&product(400, Some(310)), &recs, now(), &mut StdRng::seed_from_u64(9));
    assert_eq!(report.status, HealthStatus::Critical);
    assert_eq!(report.hours_until_maintenance, Some(100));
    assert!(report.warning_message.unwrap().starts_with("URGENT:"));
    assert_eq!(report.predictions.len(), 3);
    assert_eq!(report.predictions[0].maintenance_recommendation, "No immediate action needed");
  }

  #[test]
  fn seeded_predictions_are_repeatable() {
    let engine = Engine::with_defaults();
    let recs = vec![rec(MaintenanceType::Routine, Some(100))];
    let p = product(250, Some(200));
    let a = engine.predict_at(&p, &recs, now(), &mut StdRng::seed_from_u64(3));
    let b = engine.predict_at(&p, &recs, now(), &mut StdRng::seed_from_u64(3));
    assert_eq!(a, b);
  }

  #[test]
  fn process_rejects_malformed_product() {
    let engine = Engine::with_defaults();
    let raw = PredictionRequest {
      product: InboundProduct {
        name: Some("Gen".into()),
        total_hours_run: Some(10),
        install_date: None,
        last_service_date: None,
      },
      recommendations: Vec::new(),
    };
    let err = engine.process(&raw).unwrap_err();
    assert!(err.to_string().contains("installDate"));
  }
}
