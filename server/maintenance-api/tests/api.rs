//! Integration tests against the shipped seed catalog.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use maintenance_api::{
  get_product, get_recommendations, list_products, predict, AppState, Catalog, InMemoryCatalog,
};
use prediction_engine::HealthStatus;

fn seed_state() -> Arc<AppState> {
  let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.json");
  let catalog = InMemoryCatalog::load(path).unwrap();
  Arc::new(AppState::new(Arc::new(catalog)))
}

#[test]
fn seed_catalog_has_a_routine_entry_per_type() {
  let catalog = InMemoryCatalog::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.json")).unwrap();
  for product in catalog.products() {
    let recs = catalog.recommendations_for(&product.product_type);
    assert_eq!(recs.len(), 4, "{}", product.product_type);
    assert!(recs.iter().any(|r| r.maintenance_type == "Routine"));
  }
}

#[tokio::test]
async fn every_seed_product_gets_a_full_report() {
  let state = seed_state();
  let Json(products) = list_products(State(state.clone())).await;
  assert!(!products.is_empty());

  for product in products {
    let Json(report) = predict(State(state.clone()), Path(product.id.clone())).await.unwrap();
    assert_eq!(report.predictions.len(), 3, "{}", product.id);
    let hours = report.hours_until_maintenance.unwrap();
    assert!(hours >= 1 && hours <= 200, "{}: {}", product.id, hours);
    assert!(report.next_maintenance_date.is_some());
  }
}

#[tokio::test]
async fn overdue_standby_generator_is_critical() {
  let Json(report) = predict(State(seed_state()), Path("prod-1".into())).await.unwrap();
  assert_eq!(report.status, HealthStatus::Critical);
  // 412 run-hours on a 200-hour routine interval.
  assert_eq!(report.hours_until_maintenance, Some(188));
  assert!(report
    .warning_message
    .unwrap()
    .starts_with("URGENT: Riverside Home Standby"));
}

#[tokio::test]
async fn routine_without_hours_interval_uses_default() {
  // Pressure washer routine entry only carries a calendar interval.
  let Json(report) = predict(State(seed_state()), Path("prod-4".into())).await.unwrap();
  assert_eq!(report.hours_until_maintenance, Some(52));
}

#[tokio::test]
async fn product_and_recommendation_lookups() {
  let state = seed_state();
  let Json(product) = get_product(State(state.clone()), Path("prod-3".into())).await.unwrap();
  assert_eq!(product.product_type, "Inverter Generator");

  let Json(recs) = get_recommendations(State(state.clone()), Path("prod-3".into())).await.unwrap();
  assert!(recs.iter().all(|r| r.product_type == "Inverter Generator"));

  let err = get_product(State(state), Path("prod-999".into())).await.unwrap_err();
  assert_eq!(err.to_string(), "Product not found");
}

#[tokio::test]
async fn product_lookup_returns_maintenance_history() {
  let Json(product) = get_product(State(seed_state()), Path("prod-1".into())).await.unwrap();
  let json = serde_json::to_value(&product).unwrap();

  let history = json["maintenanceHistory"].as_array().unwrap();
  assert_eq!(history.len(), 2);
  assert_eq!(history[1]["type"], "Routine");
  assert_eq!(history[1]["hoursAtService"], 214);
  assert_eq!(json["location"]["city"], "Asheville");
  assert_eq!(json["weeklyUsage"].as_array().unwrap().len(), 7);
  assert_eq!(json["performanceMetrics"]["reliability"], 64);
  assert_eq!(json["totalHoursRun"], 412);
}

#[test]
fn router_builds_with_seed_state() {
  let _app = maintenance_api::router(seed_state());
}
