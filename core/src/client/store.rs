// core/src/client/store.rs

//! Client-side product list mirror.
//!
//! The store owns its `products` vector and changes it only from the four
//! operations below, and only after the server confirmed the change. There
//! are no optimistic updates, retries or request deduplication.

use super::api::{CatalogApi, ClientError, ClientResult};
use crate::model::{NewProduct, Product, ProductPatch};
use tracing::{info, warn};

pub const FILL_ALL_FIELDS_MESSAGE: &str = "Please fill in all fields.";
pub const CREATED_MESSAGE: &str = "Product created successfully";
pub const UPDATED_MESSAGE: &str = "Product updated successfully";

/// Result of a store mutation, ready to show to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOutcome {
  pub success: bool,
  pub message: String,
}

impl StoreOutcome {
  fn ok(message: impl Into<String>) -> Self {
    Self {
      success: true,
      message: message.into(),
    }
  }

  fn failed(message: impl Into<String>) -> Self {
    Self {
      success: false,
      message: message.into(),
    }
  }
}

impl From<ClientError> for StoreOutcome {
  fn from(err: ClientError) -> Self {
    warn!(error = %err, "Catalog call failed.");
    Self::failed(err.to_string())
  }
}

pub struct ProductStore<A> {
  api: A,
  products: Vec<Product>,
}

impl<A: CatalogApi> ProductStore<A> {
  pub fn new(api: A) -> Self {
    Self {
      api,
      products: Vec::new(),
    }
  }

  pub fn products(&self) -> &[Product] {
    &self.products
  }

  pub fn set_products(&mut self, products: Vec<Product>) {
    self.products = products;
  }

  pub fn api(&self) -> &A {
    &self.api
  }

  /// Replaces the mirror with the server's list. On failure the mirror is left as is.
  pub async fn fetch_products(&mut self) -> ClientResult<()> {
    let envelope = self.api.list().await?;
    if !envelope.success {
      return Err(ClientError::Rejected(envelope.message.unwrap_or_default()));
    }
    self.products = envelope.data.unwrap_or_default();
    info!(count = self.products.len(), "Fetched products.");
    Ok(())
  }

  pub async fn create_product(&mut self, candidate: NewProduct) -> StoreOutcome {
    if candidate.validate().is_err() {
      return StoreOutcome::failed(FILL_ALL_FIELDS_MESSAGE);
    }

    let envelope = match self.api.create(&candidate).await {
      Ok(envelope) => envelope,
      Err(err) => return err.into(),
    };
    match envelope.data {
      Some(product) if envelope.success => {
        self.products.push(product);
        StoreOutcome::ok(CREATED_MESSAGE)
      }
      _ => StoreOutcome::failed(envelope.message.unwrap_or_default()),
    }
  }

  /// On success the matching entry is replaced by the server's copy. When the
  /// server no longer has the record (`data: null`), the entry is dropped.
  pub async fn update_product(&mut self, id: &str, patch: ProductPatch) -> StoreOutcome {
    let envelope = match self.api.update(id, &patch).await {
      Ok(envelope) => envelope,
      Err(err) => return err.into(),
    };
    if !envelope.success {
      return StoreOutcome::failed(envelope.message.unwrap_or_default());
    }

    match envelope.data.flatten() {
      Some(updated) => {
        for product in self.products.iter_mut().filter(|p| p.id.to_string() == id) {
          *product = updated.clone();
        }
      }
      None => self.products.retain(|p| p.id.to_string() != id),
    }
    StoreOutcome::ok(UPDATED_MESSAGE)
  }

  pub async fn delete_product(&mut self, id: &str) -> StoreOutcome {
    let envelope = match self.api.delete(id).await {
      Ok(envelope) => envelope,
      Err(err) => return err.into(),
    };
    let message = envelope.message.unwrap_or_default();
    if !envelope.success {
      return StoreOutcome::failed(message);
    }

    self.products.retain(|p| p.id.to_string() != id);
    StoreOutcome::ok(message)
  }
}
