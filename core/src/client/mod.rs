// core/src/client/mod.rs

//! Client side of the catalog: a product list mirror kept in sync with the
//! REST surface.

pub mod api;
pub mod http;
pub mod store;

pub use api::{CatalogApi, ClientError, ClientResult};
pub use http::HttpCatalogApi;
pub use store::{ProductStore, StoreOutcome};
