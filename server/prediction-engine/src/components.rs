//! Per-component predictions: health score, advice, and potential issues.

use crate::config::Config;
use crate::types::{Component, ComponentPrediction, HealthStatus};
use crate::variability::Variability;

/// Build the three component predictions in report order.
pub fn build_components(
  status: HealthStatus,
  hours_remaining: u32,
  total_hours_run: u32,
  impacts: Variability,
  config: &Config,
) -> Vec<ComponentPrediction> {
  Component::ALL
    .iter()
    .map(|&component| ComponentPrediction {
      component,
      health_score: health_score(component, impacts),
      maintenance_recommendation: recommendation(component, hours_remaining, total_hours_run, config)
        .to_string(),
      potential_issues: if status.is_healthy() {
        Vec::new()
      } else {
        potential_issues(component).iter().map(|s| s.to_string()).collect()
      },
    })
    .collect()
}

fn health_score(component: Component, impacts: Variability) -> f64 {
  let efficiency = f64::from(impacts.efficiency_impact);
  let reliability = f64::from(impacts.reliability_impact);
  match component {
    Component::OverallSystem => 100.0 + efficiency + reliability,
    Component::Engine => 100.0 + efficiency * 1.5,
    Component::FilterSystem => 100.0 + reliability * 1.2,
  }
}

fn recommendation(
  component: Component,
  hours_remaining: u32,
  total_hours_run: u32,
  config: &Config,
) -> &'static str {
  match component {
    Component::OverallSystem if hours_remaining < config.notification_hours => {
      "Schedule routine maintenance"
    }
    Component::OverallSystem => "No immediate action needed",
    Component::Engine => "Check oil levels and condition",
    Component::FilterSystem if total_hours_run > config.filter_inspection_hours => {
      "Inspect air filter"
    }
    Component::FilterSystem => "No action needed",
  }
}

fn potential_issues(component: Component) -> &'static [&'static str] {
  match component {
    Component::OverallSystem => &["Performance degradation", "Reduced efficiency"],
    Component::Engine => &["Oil degradation", "Combustion inefficiency"],
    Component::FilterSystem => &["Reduced airflow", "Increased fuel consumption"],
  }
}
