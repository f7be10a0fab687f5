// core/src/gateway/mod.rs

//! Persistence gateway: the product schema's only door to the backing store.
//!
//! Every primitive is a single store call. Ordering and isolation between
//! concurrent calls are whatever the backend provides; nothing here adds
//! locking, versioning or caching on top.

pub mod memory;
pub mod postgres;

use crate::model::{Product, ProductDraft, ProductId, ProductPatch};
use async_trait::async_trait;
use thiserror::Error;

pub use memory::MemoryProductGateway;
pub use postgres::PgProductGateway;

#[derive(Debug, Error)]
pub enum GatewayError {
  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  /// Failure reported by a backend that is not SQL based.
  #[error("Store backend error: {0}")]
  Backend(String),
}

pub type GatewayResult<T, E = GatewayError> = std::result::Result<T, E>;

#[async_trait]
pub trait ProductGateway: Send + Sync + 'static {
  /// Assigns an id and both timestamps, persists, and returns the stored record.
  async fn insert(&self, draft: ProductDraft) -> GatewayResult<Product>;

  /// Every stored record, in the store's natural order.
  async fn find_all(&self) -> GatewayResult<Vec<Product>>;

  /// Overwrites the fields present in `patch` and refreshes `updated_at`.
  ///
  /// Returns the post-update record, or `None` when no record has this id.
  async fn replace_by_id(&self, id: ProductId, patch: ProductPatch) -> GatewayResult<Option<Product>>;

  /// Removes the record. Returns whether a record matched.
  async fn delete_by_id(&self, id: ProductId) -> GatewayResult<bool>;
}
