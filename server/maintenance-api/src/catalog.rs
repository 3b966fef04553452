//! Read-only product/recommendation catalog behind the query endpoints.

use std::path::Path;

use prediction_engine::InboundRecommendation;

use crate::error::CatalogError;
use crate::types::{CatalogSeed, ProductRecord};

/// Persistence seam for handlers. Implementations must be shareable across requests.
pub trait Catalog: Send + Sync {
  fn products(&self) -> Vec<ProductRecord>;

  fn product(&self, id: &str) -> Option<ProductRecord>;

  /// Recommendations whose product type equals `product_type` exactly.
  fn recommendations_for(&self, product_type: &str) -> Vec<InboundRecommendation>;
}

/// Catalog held in memory, loaded once from a seed file.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
  products: Vec<ProductRecord>,
  recommendations: Vec<InboundRecommendation>,
}

impl InMemoryCatalog {
  pub fn from_seed(seed: CatalogSeed) -> Self {
    Self {
      products: seed.products,
      recommendations: seed.maintenance_recommendations,
    }
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
      path: path.display().to_string(),
      source,
    })?;
    let seed: CatalogSeed = serde_json::from_str(&raw)?;
    tracing::info!(
      products = seed.products.len(),
      recommendations = seed.maintenance_recommendations.len(),
      "catalog loaded from {}",
      path.display()
    );
    Ok(Self::from_seed(seed))
  }
}

impl Catalog for InMemoryCatalog {
  fn products(&self) -> Vec<ProductRecord> {
    self.products.clone()
  }

  fn product(&self, id: &str) -> Option<ProductRecord> {
    self.products.iter().find(|p| p.id == id).cloned()
  }

  fn recommendations_for(&self, product_type: &str) -> Vec<InboundRecommendation> {
    self
      .recommendations
      .iter()
      .filter(|r| r.product_type == product_type)
      .cloned()
      .collect()
  }
}
