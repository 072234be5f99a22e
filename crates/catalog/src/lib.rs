//! Product catalog: wire model, visibility rules and the HTTP loader.
//!
//! Pure domain logic (`product`, `filter`) is kept separate from IO
//! (`loader`); the filter evaluator never touches the network.

pub mod filter;
pub mod loader;
pub mod product;

pub use filter::{FilterState, SizeFilter, TextFilter};
pub use loader::{CatalogClient, LoadError, LOAD_FAILED_MESSAGE, decode_catalog};
pub use product::{Product, ProductId};
