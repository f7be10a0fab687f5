// core/src/service.rs

//! Resource API service: the four catalog operations, independent of transport.
//!
//! Each call is one stateless transaction: validate, make a single gateway
//! call, hand back the outcome. Callers turn `ServiceError` into envelopes.
//!
//! Two behaviors are deliberate carry-overs and must not be "fixed" here:
//!  - A malformed id is reported the same way as a missing record would be
//!    (`InvalidId`, rendered as 404), while a well-formed id with no record
//!    yields a successful update with no data and a successful delete.
//!  - Create validates required fields; update does not, unless
//!    `ServiceOptions::strict_updates` is set.

use crate::gateway::{GatewayError, ProductGateway};
use crate::model::{NewProduct, Product, ProductId, ProductPatch};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

pub const INVALID_ID_MESSAGE: &str = "Invalid Product ID";
pub const DELETED_MESSAGE: &str = "Product deleted successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
  List,
  Create,
  Update,
  Delete,
}

impl Operation {
  /// Generic message sent to clients when the store fails during this operation.
  pub fn server_error_message(self) -> &'static str {
    match self {
      // Lower-case "error" is part of the published contract for updates.
      Operation::Update => "Server error",
      Operation::List | Operation::Create | Operation::Delete => "Server Error",
    }
  }
}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Operation::List => "list",
      Operation::Create => "create",
      Operation::Update => "update",
      Operation::Delete => "delete",
    };
    f.write_str(name)
  }
}

#[derive(Debug, Error)]
pub enum ServiceError {
  #[error("Validation Error: {0}")]
  Validation(&'static str),

  #[error("Invalid Product ID")]
  InvalidId,

  #[error("Store failure during {operation}: {source}")]
  Storage {
    operation: Operation,
    #[source]
    source: GatewayError,
  },
}

impl ServiceError {
  /// The message that is safe to put in a response body. Store details never are.
  pub fn public_message(&self) -> &'static str {
    match self {
      ServiceError::Validation(message) => message,
      ServiceError::InvalidId => INVALID_ID_MESSAGE,
      ServiceError::Storage { operation, .. } => operation.server_error_message(),
    }
  }
}

pub type ServiceResult<T, E = ServiceError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceOptions {
  /// Reject updates that blank out `name` or `image`.
  pub strict_updates: bool,
}

#[derive(Clone)]
pub struct ProductService {
  gateway: Arc<dyn ProductGateway>,
  options: ServiceOptions,
}

impl ProductService {
  pub fn new(gateway: Arc<dyn ProductGateway>) -> Self {
    Self::with_options(gateway, ServiceOptions::default())
  }

  pub fn with_options(gateway: Arc<dyn ProductGateway>, options: ServiceOptions) -> Self {
    Self { gateway, options }
  }

  #[instrument(name = "ProductService::list", skip(self))]
  pub async fn list(&self) -> ServiceResult<Vec<Product>> {
    self
      .gateway
      .find_all()
      .await
      .map_err(|source| storage_failure(Operation::List, source))
  }

  #[instrument(name = "ProductService::create", skip(self, candidate))]
  pub async fn create(&self, candidate: NewProduct) -> ServiceResult<Product> {
    let draft = candidate.validate().map_err(|message| {
      warn!("Rejected product candidate with missing fields.");
      ServiceError::Validation(message)
    })?;

    let product = self
      .gateway
      .insert(draft)
      .await
      .map_err(|source| storage_failure(Operation::Create, source))?;
    info!(product_id = %product.id, "Created product.");
    Ok(product)
  }

  /// Returns `Ok(None)` when the id is well-formed but matches no record.
  #[instrument(name = "ProductService::update", skip_all, fields(product_id = %raw_id))]
  pub async fn update(&self, raw_id: &str, patch: ProductPatch) -> ServiceResult<Option<Product>> {
    let id = parse_id(raw_id)?;
    if self.options.strict_updates {
      patch.validate_present().map_err(ServiceError::Validation)?;
    }

    let updated = self
      .gateway
      .replace_by_id(id, patch)
      .await
      .map_err(|source| storage_failure(Operation::Update, source))?;
    if updated.is_none() {
      warn!("Update matched no product; reporting success with empty data.");
    }
    Ok(updated)
  }

  /// Succeeds whether or not a record matched.
  #[instrument(name = "ProductService::delete", skip_all, fields(product_id = %raw_id))]
  pub async fn delete(&self, raw_id: &str) -> ServiceResult<()> {
    let id = parse_id(raw_id)?;
    let removed = self
      .gateway
      .delete_by_id(id)
      .await
      .map_err(|source| storage_failure(Operation::Delete, source))?;
    info!(removed, "Processed product delete.");
    Ok(())
  }
}

fn parse_id(raw_id: &str) -> ServiceResult<ProductId> {
  ProductId::parse(raw_id).ok_or_else(|| {
    warn!("Malformed product id.");
    ServiceError::InvalidId
  })
}

fn storage_failure(operation: Operation, source: GatewayError) -> ServiceError {
  error!(%operation, error = %source, "Product store call failed.");
  ServiceError::Storage { operation, source }
}
