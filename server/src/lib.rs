// server/src/lib.rs

//! HTTP front for the product catalog: configuration, shared state, the
//! actix-web routes under `/api/products`, and logging setup.

pub mod config;
pub mod errors;
pub mod logging;
pub mod state;
pub mod web;

pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use state::AppState;
