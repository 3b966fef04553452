//! Randomized score impacts simulating real-world variability.
//!
//! The random source is always passed in, so callers that need repeatable
//! output can hand over a seeded generator or build a `Variability` directly.

use rand::Rng;

use crate::types::HealthStatus;

/// Score impacts drawn once per prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Variability {
  pub efficiency_impact: i32,
  pub reliability_impact: i32,
}

impl Variability {
  pub fn new(efficiency_impact: i32, reliability_impact: i32) -> Self {
    Self {
      efficiency_impact,
      reliability_impact,
    }
  }

  /// Draw impacts for the given status.
  ///
  /// - efficiency: [-5, -1] when not Healthy, else [-2, 0]
  /// - reliability: [-8, -3] when Critical, [-4, -1] when Warning, else 0
  pub fn draw<R: Rng + ?Sized>(status: HealthStatus, rng: &mut R) -> Self {
    let efficiency_impact = if status.is_healthy() {
      rng.gen_range(-2..=0)
    } else {
      rng.gen_range(-5..=-1)
    };
    let reliability_impact = match status {
      HealthStatus::Critical => rng.gen_range(-8..=-3),
      HealthStatus::Warning => rng.gen_range(-4..=-1),
      _ => 0,
    };
    Self::new(efficiency_impact, reliability_impact)
  }
}
