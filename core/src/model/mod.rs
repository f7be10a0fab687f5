// core/src/model/mod.rs

//! Product entity, its identifier, and the per-operation candidate types.

pub mod product;

pub use product::{NewProduct, Product, ProductDraft, ProductId, ProductPatch, MISSING_FIELDS_MESSAGE};
