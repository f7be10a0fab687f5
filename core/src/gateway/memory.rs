// core/src/gateway/memory.rs

//! In-process product store.
//!
//! Records live in a vector behind a single lock, so `find_all` returns them in
//! insertion order. Nothing survives a restart; this backend serves tests and
//! local runs without a database.

use super::{GatewayResult, ProductGateway};
use crate::model::{Product, ProductDraft, ProductId, ProductPatch};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone, Default)]
pub struct MemoryProductGateway {
  records: Arc<RwLock<Vec<Product>>>,
}

impl MemoryProductGateway {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.records.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.read().is_empty()
  }
}

#[async_trait]
impl ProductGateway for MemoryProductGateway {
  async fn insert(&self, draft: ProductDraft) -> GatewayResult<Product> {
    let now = Utc::now();
    let product = Product {
      id: ProductId::generate(),
      name: draft.name,
      price: draft.price,
      image: draft.image,
      created_at: now,
      updated_at: now,
    };
    self.records.write().push(product.clone());
    debug!(product_id = %product.id, "Inserted product into memory store.");
    Ok(product)
  }

  async fn find_all(&self) -> GatewayResult<Vec<Product>> {
    Ok(self.records.read().clone())
  }

  async fn replace_by_id(&self, id: ProductId, patch: ProductPatch) -> GatewayResult<Option<Product>> {
    let mut guard = self.records.write();
    let Some(product) = guard.iter_mut().find(|p| p.id == id) else {
      return Ok(None);
    };
    patch.apply_to(product);
    product.updated_at = Utc::now();
    Ok(Some(product.clone()))
  }

  async fn delete_by_id(&self, id: ProductId) -> GatewayResult<bool> {
    let mut guard = self.records.write();
    let before = guard.len();
    guard.retain(|p| p.id != id);
    Ok(guard.len() != before)
  }
}
