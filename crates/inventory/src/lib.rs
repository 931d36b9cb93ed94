//! Inventory stock module.
//!
//! An in-memory mapping from item name to quantity with add/remove/query
//! operations, low-stock listing, JSON persistence and a plain-text report.
//! Failures are returned as [`StockError`](stockroom_core::StockError) and the
//! soft ones are also logged through `tracing`.

pub mod loose;
pub mod persist;
pub mod report;
pub mod store;

pub use persist::DEFAULT_DATA_FILE;
pub use report::Report;
pub use store::{
    DEFAULT_LOW_THRESHOLD, DepletionPolicy, InventoryStore, StockChange, StockLogEntry,
};
