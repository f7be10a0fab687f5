// server/src/state.rs
use crate::config::{AppConfig, StoreBackend};
use crate::errors::{AppError, Result};
use catalog::{MemoryProductGateway, PgProductGateway, ProductGateway, ProductService, ServiceOptions};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub products: ProductService,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(config: AppConfig, gateway: Arc<dyn ProductGateway>) -> Self {
    let options = ServiceOptions {
      strict_updates: config.strict_updates,
    };
    Self {
      products: ProductService::with_options(gateway, options),
      config: Arc::new(config),
    }
  }

  /// Connects the configured store. A connection failure is fatal for startup.
  pub async fn initialize(config: AppConfig) -> Result<Self> {
    let gateway: Arc<dyn ProductGateway> = match config.store_backend {
      StoreBackend::Postgres => {
        let url = config
          .database_url
          .as_deref()
          .ok_or_else(|| AppError::Config("DATABASE_URL is not set".to_string()))?;
        Arc::new(PgProductGateway::connect(url, config.database_max_connections).await?)
      }
      StoreBackend::Memory => {
        tracing::warn!("Using the in-memory product store; data will not survive a restart.");
        Arc::new(MemoryProductGateway::new())
      }
    };
    Ok(Self::new(config, gateway))
  }
}
