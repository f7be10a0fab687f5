// server/src/web/mod.rs

// Declare child modules
pub mod handlers;
pub mod routes;

// Re-export key items so main.rs and tests can mount the API directly.
pub use routes::{configure_app_routes, json_config};
