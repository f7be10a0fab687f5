// src/lib.rs

//! Catalog: the product resource lifecycle behind a small REST surface.
//!
//! The crate is layered the same way requests flow:
//!  - `model`: the `Product` entity and the create/update candidate types.
//!  - `gateway`: the persistence contract (`ProductGateway`) with a PostgreSQL
//!    implementation and an in-process one.
//!  - `service`: `ProductService`, which validates, calls the gateway once, and
//!    reports outcomes as `ServiceError` for the transport to render.
//!  - `envelope`: the `{ success, data?, message? }` response wrapper.
//!  - `client`: a client-side `ProductStore` that mirrors the product list.

pub mod client;
pub mod envelope;
pub mod gateway;
pub mod model;
pub mod service;

// --- Re-exports for the Public API ---

pub use crate::envelope::Envelope;
pub use crate::gateway::{GatewayError, GatewayResult, MemoryProductGateway, PgProductGateway, ProductGateway};
pub use crate::model::{NewProduct, Product, ProductDraft, ProductId, ProductPatch, MISSING_FIELDS_MESSAGE};
pub use crate::service::{
  Operation, ProductService, ServiceError, ServiceOptions, ServiceResult, DELETED_MESSAGE, INVALID_ID_MESSAGE,
};
