//! Shared application state.

use std::sync::Arc;

use prediction_engine::Engine;

use crate::catalog::Catalog;

pub struct AppState {
  pub catalog: Arc<dyn Catalog>,
  pub engine: Engine,
}

impl AppState {
  pub fn new(catalog: Arc<dyn Catalog>) -> Self {
    Self {
      catalog,
      engine: Engine::with_defaults(),
    }
  }
}
