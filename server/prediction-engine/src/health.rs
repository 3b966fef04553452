//! Health classification from run-hours and time since last service.

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::date::days_between;
use crate::types::{HealthStatus, Product};

/// Days since the last service, or since install when never serviced.
pub fn days_since_service(product: &Product, now: DateTime<Utc>) -> i64 {
  let since = product.last_service_date.unwrap_or(product.install_date);
  days_between(since, now)
}

/// Classify a product as Healthy, Warning or Critical. First matching rule wins.
///
/// `_hours_remaining` is part of the call contract but does not affect the result.
pub fn classify_health(
  product: &Product,
  _hours_remaining: u32,
  now: DateTime<Utc>,
  config: &Config,
) -> HealthStatus {
  let hours = product.total_hours_run;
  let days = days_since_service(product, now);

  if hours > config.critical_hours && days > config.critical_days {
    HealthStatus::Critical
  } else if (hours > config.warning_hours && days > config.warning_days)
    || hours > config.warning_hours_absolute
  {
    HealthStatus::Warning
  } else {
    HealthStatus::Healthy
  }
}
