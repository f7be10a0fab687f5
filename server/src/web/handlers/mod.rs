// server/src/web/handlers/mod.rs

// Declare handler modules
pub mod product_handlers;
