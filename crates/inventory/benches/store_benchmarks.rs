use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockroom_core::{ItemName, Quantity};
use stockroom_inventory::{InventoryStore, DEFAULT_LOW_THRESHOLD};

fn filled_store(items: usize) -> InventoryStore {
    let mut store = InventoryStore::new();
    for i in 0..items {
        let name = ItemName::new(format!("item-{i:06}")).unwrap();
        store.add(name, Quantity::from((i % 10) as i32 + 1)).unwrap();
    }
    store
}

fn bench_add_and_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_remove");

    group.bench_function("add_existing_item", |b| {
        let mut store = filled_store(1_000);
        let name = ItemName::new("item-000500").unwrap();
        b.iter(|| {
            store.add(black_box(name.clone()), Quantity::from(1)).unwrap();
        });
    });

    group.bench_function("add_then_deplete", |b| {
        let mut store = filled_store(1_000);
        let name = ItemName::new("transient").unwrap();
        b.iter(|| {
            store.add(name.clone(), Quantity::from(3)).unwrap();
            store.remove(black_box("transient"), Quantity::from(3)).unwrap();
        });
    });

    group.finish();
}

fn bench_list_low(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_low");

    for size in [100usize, 1_000, 10_000] {
        let store = filled_store(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| black_box(store.list_low(DEFAULT_LOW_THRESHOLD)));
        });
    }

    group.finish();
}

fn bench_save_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("persistence");
    let store = filled_store(1_000);
    let path = std::env::temp_dir().join(format!("stockroom_bench_{}.json", std::process::id()));

    group.bench_function("save_1000_items", |b| {
        b.iter(|| store.save(&path).unwrap());
    });

    store.save(&path).unwrap();
    group.bench_function("load_1000_items", |b| {
        let mut target = InventoryStore::new();
        b.iter(|| target.load(&path).unwrap());
    });

    group.finish();
    let _ = std::fs::remove_file(&path);
}

criterion_group!(benches, bench_add_and_remove, bench_list_low, bench_save_load);
criterion_main!(benches);
