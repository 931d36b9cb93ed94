//! Untyped entry points.
//!
//! Callers that receive stock changes as JSON (or any other dynamically typed
//! source) go through here; the shape checks that the typed API gets from the
//! compiler happen at runtime instead.

use serde_json::Value;

use stockroom_core::{ItemName, Quantity, StockError, StockResult};

use crate::store::{InventoryStore, StockChange, StockLogEntry};

/// Renders a loose argument the way it shows up in log lines (bare strings).
fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn as_quantity(value: &Value) -> Option<Quantity> {
    match value {
        Value::Number(n) => Quantity::try_from(n).ok(),
        _ => None,
    }
}

fn parse_add_args(item: &Value, qty: &Value) -> Option<(ItemName, Quantity)> {
    let name = ItemName::new(item.as_str()?).ok()?;
    let qty = as_quantity(qty)?;
    Some((name, qty))
}

impl InventoryStore {
    /// `add` for untyped arguments.
    ///
    /// `item` must be a non-empty string and `qty` a number; anything else is
    /// logged as a warning and rejected with [`StockError::InvalidInput`]
    /// without touching the store.
    pub fn add_loose(&mut self, item: &Value, qty: &Value) -> StockResult<StockLogEntry> {
        match parse_add_args(item, qty) {
            Some((name, qty)) => self.add(name, qty),
            None => {
                let (item, qty) = (describe(item), describe(qty));
                tracing::warn!("Invalid input types: item={item}, qty={qty}");
                Err(StockError::invalid_input(item, qty))
            }
        }
    }

    /// `remove` for untyped arguments.
    ///
    /// A non-string `item` can never be stocked, so it is reported as not
    /// found. A stocked item paired with a non-numeric `qty` is an unexpected
    /// error. Neither case mutates the store.
    pub fn remove_loose(&mut self, item: &Value, qty: &Value) -> StockResult<StockChange> {
        let Some(name) = item.as_str() else {
            let item = describe(item);
            tracing::error!("Tried to remove non-existing item: {item}");
            return Err(StockError::item_not_found(item));
        };

        if !self.contains(name) {
            tracing::error!("Tried to remove non-existing item: {name}");
            return Err(StockError::item_not_found(name));
        }

        let Some(qty) = as_quantity(qty) else {
            let reason = format!("unsupported quantity {qty}");
            tracing::error!("Unexpected error removing item {name}: {reason}");
            return Err(StockError::unexpected(name, reason));
        };

        self.remove(name, qty)
    }
}
