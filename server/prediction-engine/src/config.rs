//! Engine configuration with sane defaults.

/// Tunable thresholds for maintenance prediction.
#[derive(Debug, Clone)]
pub struct Config {
  /// Routine interval (run-hours) used when a recommendation has none, or a non-positive one.
  pub default_hours_interval: u32,
  /// Run-hours above which a long-unserviced unit is Critical.
  pub critical_hours: u32,
  /// Days since service above which a high-hours unit is Critical.
  pub critical_days: i64,
  /// Run-hours above which a long-unserviced unit is Warning.
  pub warning_hours: u32,
  /// Days since service paired with `warning_hours`.
  pub warning_days: i64,
  /// Run-hours above which a unit is Warning regardless of service date.
  pub warning_hours_absolute: u32,
  /// Hours remaining below which a routine-maintenance notice is issued.
  pub notification_hours: u32,
  /// Run-hours above which the air filter should be inspected.
  pub filter_inspection_hours: u32,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      default_hours_interval: 100,
      critical_hours: 350,
      critical_days: 300,
      warning_hours: 200,
      warning_days: 180,
      warning_hours_absolute: 300,
      notification_hours: 50,
      filter_inspection_hours: 50,
    }
  }
}
