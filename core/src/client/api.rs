// core/src/client/api.rs

use crate::envelope::Envelope;
use crate::model::{NewProduct, Product, ProductPatch};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
  #[error("Invalid catalog base URL '{url}': {reason}")]
  InvalidBaseUrl { url: String, reason: String },

  #[error("Catalog request failed: {0}")]
  Transport(#[from] reqwest::Error),

  /// The server answered with `success: false`.
  #[error("{0}")]
  Rejected(String),
}

pub type ClientResult<T, E = ClientError> = std::result::Result<T, E>;

/// The catalog's REST surface as seen from the client store.
///
/// Error statuses still carry an envelope, so implementations return the
/// decoded envelope for every HTTP status and reserve `Err` for transport and
/// decoding failures.
#[async_trait]
pub trait CatalogApi: Send + Sync {
  async fn list(&self) -> ClientResult<Envelope<Vec<Product>>>;

  async fn create(&self, candidate: &NewProduct) -> ClientResult<Envelope<Product>>;

  async fn update(&self, id: &str, patch: &ProductPatch) -> ClientResult<Envelope<Option<Product>>>;

  async fn delete(&self, id: &str) -> ClientResult<Envelope<()>>;
}
