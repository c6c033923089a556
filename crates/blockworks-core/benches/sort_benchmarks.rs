use blockworks_core::{BlockStore, SortOrder, sort_by_name};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn generated_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("Block {:05} {}", (i * 7919) % count, if i % 2 == 0 { "Mk" } else { "mk" }))
        .collect()
}

fn sort_names_benchmark(c: &mut Criterion) {
    let names = generated_names(10_000);

    c.bench_function("sort::sort_by_name (ascending, 10k)", |b| {
        b.iter(|| {
            let mut items = names.clone();
            sort_by_name(black_box(&mut items), SortOrder::Ascending);
        })
    });

    c.bench_function("sort::sort_by_name (descending, 10k)", |b| {
        b.iter(|| {
            let mut items = names.clone();
            sort_by_name(black_box(&mut items), SortOrder::Descending);
        })
    });
}

fn store_benchmark(c: &mut Criterion) {
    let mut store = BlockStore::with_seed();
    for name in generated_names(2_000) {
        let _ = store.add(&name, [("Steel Plates", 1)]);
    }

    c.bench_function("store::BlockStore::sort (2k)", |b| {
        b.iter(|| {
            let mut store = store.clone();
            black_box(store.sort(SortOrder::Descending).len());
        })
    });

    c.bench_function("store::BlockStore::search (2k)", |b| {
        b.iter(|| black_box(store.search(black_box("mk")).len()))
    });
}

criterion_group!(benches, sort_names_benchmark, store_benchmark);
criterion_main!(benches);
