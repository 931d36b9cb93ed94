//! Plain-text stock report.

use std::io;

use crate::store::InventoryStore;

/// Borrowed view that renders a store as an "Items Report".
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    store: &'a InventoryStore,
}

impl core::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Items Report")?;
        for (item, qty) in self.store.iter() {
            writeln!(f, "{item} -> {qty}")?;
        }
        Ok(())
    }
}

impl InventoryStore {
    pub fn report(&self) -> Report<'_> {
        Report { store: self }
    }

    pub fn write_report<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{}", self.report())
    }
}
