//! Fixed demonstration sequence run by the `stockroom` binary.

use std::io::Write;

use anyhow::Context;
use serde_json::json;

use stockroom_core::{ItemName, Quantity};
use stockroom_inventory::InventoryStore;

use crate::settings::Settings;

fn format_items(items: &[ItemName]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Run the demo against a fresh store and print to `out`.
///
/// Soft failures along the way are left to the store's own logging; only
/// saving (and writing to `out`) can fail the run.
pub fn run<W: Write>(settings: &Settings, mut out: W) -> anyhow::Result<InventoryStore> {
    let mut store = InventoryStore::with_policy(settings.depletion);

    let _ = store.add(ItemName::new("apple")?, Quantity::from(10));
    let _ = store.add(ItemName::new("banana")?, Quantity::from(-2));
    let _ = store.add_loose(&json!(123), &json!("ten"));
    let _ = store.remove("apple", Quantity::from(3));
    let _ = store.remove("orange", Quantity::from(1));

    writeln!(out, "Apple stock: {}", store.query("apple"))?;
    writeln!(
        out,
        "Low items: {}",
        format_items(&store.list_low(settings.low_threshold))
    )?;

    store
        .save(&settings.data_file)
        .with_context(|| format!("saving stock to {}", settings.data_file.display()))?;
    let _ = store.load(&settings.data_file);

    store.write_report(&mut out)?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use stockroom_inventory::DepletionPolicy;

    fn settings_in_temp(depletion: DepletionPolicy) -> Settings {
        let data_file: PathBuf =
            std::env::temp_dir().join(format!("stockroom_demo_{}.json", uuid::Uuid::now_v7()));
        Settings {
            data_file,
            depletion,
            ..Settings::default()
        }
    }

    #[test]
    fn demo_sequence_under_delete_policy() {
        let settings = settings_in_temp(DepletionPolicy::Delete);
        let mut out = Vec::new();
        let store = run(&settings, &mut out).unwrap();

        assert_eq!(store.query("apple"), Quantity::from(7));
        assert_eq!(store.query("banana"), Quantity::ZERO);
        assert!(store.list_low(settings.low_threshold).is_empty());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Apple stock: 7\nLow items: []\nItems Report\napple -> 7\n"
        );
        let _ = std::fs::remove_file(&settings.data_file);
    }

    #[test]
    fn demo_sequence_under_retain_policy() {
        let settings = settings_in_temp(DepletionPolicy::Retain);
        let mut out = Vec::new();
        let store = run(&settings, &mut out).unwrap();

        assert_eq!(store.query("banana"), Quantity::from(-2));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Apple stock: 7\nLow items: ['banana']\nItems Report\napple -> 7\nbanana -> -2\n"
        );
        let _ = std::fs::remove_file(&settings.data_file);
    }

    #[test]
    fn save_failure_fails_the_run() {
        let settings = Settings {
            data_file: std::env::temp_dir()
                .join(format!("stockroom_missing_{}", uuid::Uuid::now_v7()))
                .join("inventory.json"),
            ..Settings::default()
        };
        let err = run(&settings, Vec::new()).unwrap_err();
        assert!(err.to_string().starts_with("saving stock to"));
    }
}
