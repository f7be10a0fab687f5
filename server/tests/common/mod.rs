// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use catalog::{GatewayError, GatewayResult, Product, ProductDraft, ProductGateway, ProductId, ProductPatch};
use catalog_server::{AppConfig, AppState};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;

/// Builds an initialized actix test service around `$state` with the real routes.
#[allow(unused_macros)]
macro_rules! test_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state))
        .configure(catalog_server::web::configure_app_routes),
    )
    .await
  };
}

pub fn memory_state() -> AppState {
  AppState::new(AppConfig::default(), Arc::new(catalog::MemoryProductGateway::new()))
}

pub fn state_with(gateway: Arc<dyn ProductGateway>, strict_updates: bool) -> AppState {
  let config = AppConfig {
    strict_updates,
    ..AppConfig::default()
  };
  AppState::new(config, gateway)
}

/// Fails every call and counts how many reached it.
#[derive(Clone, Default)]
pub struct BrokenGateway {
  calls: Arc<AtomicUsize>,
}

impl BrokenGateway {
  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  fn fail<T>(&self) -> GatewayResult<T> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    Err(GatewayError::Backend("primary unreachable at 10.0.0.7".to_string()))
  }
}

#[async_trait]
impl ProductGateway for BrokenGateway {
  async fn insert(&self, _draft: ProductDraft) -> GatewayResult<Product> {
    self.fail()
  }

  async fn find_all(&self) -> GatewayResult<Vec<Product>> {
    self.fail()
  }

  async fn replace_by_id(&self, _id: ProductId, _patch: ProductPatch) -> GatewayResult<Option<Product>> {
    self.fail()
  }

  async fn delete_by_id(&self, _id: ProductId) -> GatewayResult<bool> {
    self.fail()
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
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
