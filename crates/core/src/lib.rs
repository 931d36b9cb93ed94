//! `stockroom-core`: stock domain building blocks.
//!
//! This crate contains **pure domain** primitives (no file or logging concerns).

pub mod error;
pub mod item;
pub mod quantity;

pub use error::{StockError, StockResult};
pub use item::ItemName;
pub use quantity::Quantity;
