//! The fixed product catalog.
//!
//! Products are declared as JSON, parsed and validated once at startup, and never mutated
//! afterwards. Every other module holds products through `Arc<Product>`.

pub(crate) mod product;

pub use product::{Catalog, Product, ProductCategory, ProductId};
