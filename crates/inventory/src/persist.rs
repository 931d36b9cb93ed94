//! JSON file persistence for [`InventoryStore`].
//!
//! The file is a single JSON object mapping item names to numbers, written
//! with 2-space indentation.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use stockroom_core::{ItemName, Quantity, StockError, StockResult};

use crate::store::{DepletionPolicy, InventoryStore};

/// Default location of the stock file.
pub const DEFAULT_DATA_FILE: &str = "inventory.json";

impl InventoryStore {
    /// Replace the whole store with the contents of `path`.
    ///
    /// A missing file is a soft failure: it is logged, the store is emptied
    /// and [`StockError::FileMissing`] is returned. Unreadable or malformed
    /// files leave the store untouched. Loaded entries are taken as-is; the
    /// depletion policy only applies to later mutations.
    pub fn load(&mut self, path: impl AsRef<Path>) -> StockResult<()> {
        let path = path.as_ref();
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("{} not found, starting with empty stock.", path.display());
                self.stock.clear();
                return Err(StockError::file_missing(path));
            }
            Err(err) => return Err(StockError::io(path, &err)),
        };

        let stock: BTreeMap<ItemName, Quantity> = serde_json::from_str(&raw)
            .map_err(|e| StockError::malformed(format!("{}: {e}", path.display())))?;
        self.stock = stock;
        Ok(())
    }

    /// Build a store from `path`, starting empty when the file does not exist.
    pub fn open(path: impl AsRef<Path>, policy: DepletionPolicy) -> StockResult<Self> {
        let mut store = Self::with_policy(policy);
        match store.load(path) {
            Ok(()) | Err(StockError::FileMissing(_)) => Ok(store),
            Err(err) => Err(err),
        }
    }

    /// Write the whole store to `path`.
    ///
    /// Unlike [`load`](Self::load), failures here are returned, not logged.
    pub fn save(&self, path: impl AsRef<Path>) -> StockResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.stock)
            .map_err(|e| StockError::malformed(e.to_string()))?;
        fs::write(path, json).map_err(|e| StockError::io(path, &e))
    }
}
