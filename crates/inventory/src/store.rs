use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{ItemName, Quantity, StockError, StockResult};

/// Threshold used by callers that do not pick their own low-stock cutoff.
pub const DEFAULT_LOW_THRESHOLD: Quantity = Quantity::from_i32(5);

/// What happens to an entry whose quantity drops to zero or below.
///
/// The policy is consulted after every mutation, `add` included.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepletionPolicy {
    /// Drop the entry; afterwards it is indistinguishable from an unknown item.
    #[default]
    Delete,
    /// Keep the entry with its zero or negative quantity.
    Retain,
}

impl DepletionPolicy {
    pub fn keeps(self, qty: Quantity) -> bool {
        match self {
            DepletionPolicy::Delete => !qty.is_depleted(),
            DepletionPolicy::Retain => true,
        }
    }
}

impl FromStr for DepletionPolicy {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delete" => Ok(DepletionPolicy::Delete),
            "retain" => Ok(DepletionPolicy::Retain),
            other => Err(StockError::validation(format!(
                "unknown depletion policy: {other}"
            ))),
        }
    }
}

/// Result of a successful stock change.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StockChange {
    /// The entry is still stocked with this quantity.
    Remaining(Quantity),
    /// The entry was dropped by [`DepletionPolicy::Delete`].
    Depleted,
}

/// Timestamped record of a successful `add`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLogEntry {
    pub at: DateTime<Utc>,
    pub item: ItemName,
    pub qty: Quantity,
}

impl StockLogEntry {
    pub fn message(&self) -> String {
        format!("Added {} of {}", self.qty, self.item)
    }
}

impl core::fmt::Display for StockLogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.at.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.message()
        )
    }
}

/// In-memory stock: item name → quantity.
///
/// Owned by the caller; nothing here is process-global. Iteration (and
/// therefore reports, low-stock lists and saved files) follows ascending item
/// name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryStore {
    pub(crate) stock: BTreeMap<ItemName, Quantity>,
    policy: DepletionPolicy,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DepletionPolicy) -> Self {
        Self {
            stock: BTreeMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DepletionPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, Quantity)> + '_ {
        self.stock.iter().map(|(item, qty)| (item, *qty))
    }

    /// Add `qty` to `item`, creating the entry if needed.
    ///
    /// Zero and negative quantities are accepted; a negative add lowers stock.
    pub fn add(&mut self, item: ItemName, qty: Quantity) -> StockResult<StockLogEntry> {
        self.add_at(item, qty, Utc::now())
    }

    /// Same as [`add`](Self::add) with an explicit timestamp for the log entry.
    pub fn add_at(
        &mut self,
        item: ItemName,
        qty: Quantity,
        at: DateTime<Utc>,
    ) -> StockResult<StockLogEntry> {
        let current = self.query(item.as_str());
        let Some(updated) = current.checked_add(qty) else {
            let err = StockError::unexpected(item.as_str(), "quantity overflow");
            tracing::error!("Unexpected error adding item {item}: quantity overflow");
            return Err(err);
        };

        let entry = StockLogEntry {
            at,
            item: item.clone(),
            qty,
        };
        tracing::info!("{}", entry.message());

        self.settle(item, updated);
        Ok(entry)
    }

    /// Take `qty` away from `item`.
    ///
    /// Absent items are reported as [`StockError::ItemNotFound`] and leave the
    /// store untouched. Reaching zero or below is handled by the store policy.
    pub fn remove(&mut self, item: &str, qty: Quantity) -> StockResult<StockChange> {
        let Some((name, current)) = self
            .stock
            .get_key_value(item)
            .map(|(name, current)| (name.clone(), *current))
        else {
            tracing::error!("Tried to remove non-existing item: {item}");
            return Err(StockError::item_not_found(item));
        };

        let Some(updated) = current.checked_sub(qty) else {
            tracing::error!("Unexpected error removing item {item}: quantity overflow");
            return Err(StockError::unexpected(item, "quantity overflow"));
        };

        Ok(self.settle(name, updated))
    }

    /// Stored quantity, or zero when the item is unknown.
    pub fn query(&self, item: &str) -> Quantity {
        self.stock.get(item).copied().unwrap_or(Quantity::ZERO)
    }

    /// Items whose quantity is strictly below `threshold`.
    pub fn list_low(&self, threshold: Quantity) -> Vec<ItemName> {
        self.stock
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    fn settle(&mut self, item: ItemName, qty: Quantity) -> StockChange {
        if self.policy.keeps(qty) {
            self.stock.insert(item, qty);
            StockChange::Remaining(qty)
        } else {
            self.stock.remove(&item);
            StockChange::Depleted
        }
    }
}
