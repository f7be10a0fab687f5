// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use catalog::{
  GatewayError, GatewayResult, MemoryProductGateway, NewProduct, Product, ProductDraft, ProductGateway, ProductId,
  ProductPatch,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;

// --- Candidates ---
pub fn chair() -> NewProduct {
  NewProduct::new("Chair", 49.99, "http://x/img.png")
}

pub fn lamp() -> NewProduct {
  NewProduct::new("Lamp", 19.5, "http://x/lamp.png")
}

pub fn draft(candidate: NewProduct) -> ProductDraft {
  candidate.validate().expect("test candidate should be valid")
}

// --- Gateway double ---

/// Wraps a `MemoryProductGateway`, counting calls and failing on demand.
#[derive(Clone, Default)]
pub struct RecordingGateway {
  pub inner: MemoryProductGateway,
  calls: Arc<AtomicUsize>,
  failing: Arc<AtomicBool>,
}

impl RecordingGateway {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn failing() -> Self {
    let gateway = Self::default();
    gateway.set_failing(true);
    gateway
  }

  pub fn set_failing(&self, failing: bool) {
    self.failing.store(failing, Ordering::SeqCst);
  }

  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  fn enter(&self) -> GatewayResult<()> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    if self.failing.load(Ordering::SeqCst) {
      return Err(GatewayError::Backend("connection reset by peer".to_string()));
    }
    Ok(())
  }
}

#[async_trait]
impl ProductGateway for RecordingGateway {
  async fn insert(&self, draft: ProductDraft) -> GatewayResult<Product> {
    self.enter()?;
    self.inner.insert(draft).await
  }

  async fn find_all(&self) -> GatewayResult<Vec<Product>> {
    self.enter()?;
    self.inner.find_all().await
  }

  async fn replace_by_id(&self, id: ProductId, patch: ProductPatch) -> GatewayResult<Option<Product>> {
    self.enter()?;
    self.inner.replace_by_id(id, patch).await
  }

  async fn delete_by_id(&self, id: ProductId) -> GatewayResult<bool> {
    self.enter()?;
    self.inner.delete_by_id(id).await
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
