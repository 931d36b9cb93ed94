//! Stock error model.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type used across the stock layer.
pub type StockResult<T> = Result<T, StockError>;

/// Stock-level error.
///
/// Every store operation reports its failure through one of these variants.
/// The store also logs the soft kinds itself (bad input, missing item,
/// missing file), so callers may ignore them and still get a record.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StockError {
    /// `add` received arguments of the wrong shape.
    #[error("invalid input types: item={item}, qty={qty}")]
    InvalidInput { item: String, qty: String },

    /// `remove` targeted an item that is not stocked.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// Any other failure while removing stock.
    #[error("unexpected error removing item {item}: {reason}")]
    Unexpected { item: String, reason: String },

    /// `load` was pointed at a file that does not exist.
    #[error("{} not found", .0.display())]
    FileMissing(PathBuf),

    /// The persisted file is not an object of item names to numbers.
    #[error("malformed stock file: {0}")]
    Malformed(String),

    /// Reading or writing a stock file failed.
    #[error("i/o error on {}: {reason}", .path.display())]
    Io { path: PathBuf, reason: String },

    /// A value failed validation (e.g. an empty item name).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl StockError {
    pub fn invalid_input(item: impl ToString, qty: impl ToString) -> Self {
        Self::InvalidInput {
            item: item.to_string(),
            qty: qty.to_string(),
        }
    }

    pub fn item_not_found(item: impl Into<String>) -> Self {
        Self::ItemNotFound(item.into())
    }

    pub fn unexpected(item: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unexpected {
            item: item.into(),
            reason: reason.into(),
        }
    }

    pub fn file_missing(path: impl AsRef<Path>) -> Self {
        Self::FileMissing(path.as_ref().to_path_buf())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    pub fn io(path: impl AsRef<Path>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            reason: err.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
