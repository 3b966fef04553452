//! Equipment maintenance prediction engine — deterministic rules plus injected variability.
//!
//! Turns a product's usage history and the manufacturer maintenance
//! recommendations for its type into a health status, a countdown to the next
//! routine service, and per-component advisories.
//!
//! No DB, no network; pure computation. Randomness comes from a caller-supplied
//! `rand::Rng` (or the thread-local generator via `Engine::predict`).

pub mod components;
pub mod config;
pub mod date;
pub mod engine;
pub mod error;
pub mod health;
pub mod normalize;
pub mod types;
pub mod variability;

pub use config::Config;
pub use engine::Engine;
pub use error::EngineError;
pub use types::{
  ComponentPrediction, HealthStatus, InboundProduct, InboundRecommendation, PredictionReport,
  PredictionRequest,
};
pub use variability::Variability;
