//! Shopping cart domain: line items and quantity bookkeeping.
//!
//! Deterministic domain logic only (no IO, no HTTP). The cart lives for the
//! session and is never persisted.

pub mod cart;

pub use cart::{Cart, CartLine};
