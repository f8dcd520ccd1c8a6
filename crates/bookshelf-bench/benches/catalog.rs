//! Catalog benchmarks: search, filter, and cursor traversal.

use bookshelf_bench::fixtures::{generate_catalog, Scale};
use bookshelf_core::{Book, Category, Predicate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog/search");

    for scale in [Scale::Small, Scale::Medium] {
        let catalog = generate_catalog(scale);
        let last_title = catalog
            .books()
            .last()
            .map(|b| b.title.to_uppercase())
            .unwrap_or_default();

        group.bench_with_input(
            BenchmarkId::new("last", scale.count()),
            &last_title,
            |b, title| {
                b.iter(|| black_box(catalog.search(title)));
            },
        );

        group.bench_function(BenchmarkId::new("miss", scale.count()), |b| {
            b.iter(|| black_box(catalog.search("no such title")));
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog/filter");
    let catalog = generate_catalog(Scale::Medium);

    group.bench_function("category", |b| {
        let predicate = Predicate::category(Category::Mystery);
        b.iter(|| black_box(catalog.filter_by(&predicate)));
    });

    group.bench_function("category_and_author", |b| {
        let predicate =
            Predicate::category(Category::Mystery).and(Predicate::author("christie"));
        b.iter(|| black_box(catalog.filter_by(&predicate)));
    });

    group.bench_function("closure", |b| {
        let closure = |book: &Book| book.category == Category::Mystery;
        b.iter(|| black_box(catalog.filter_by(&closure)));
    });

    group.finish();
}

fn bench_cursor(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog/cursor");
    let catalog = generate_catalog(Scale::Medium);

    group.bench_function("forward_walk", |b| {
        b.iter(|| {
            let mut cursor = catalog.cursor();
            let mut count = 0usize;
            while cursor.current_item().is_some() {
                count += 1;
                cursor.next();
            }
            black_box(count)
        });
    });

    group.bench_function("backward_walk", |b| {
        b.iter(|| {
            let mut cursor = catalog.cursor();
            while cursor.next().is_some() {}
            let mut count = 0usize;
            while cursor.previous().is_some() {
                count += 1;
            }
            black_box(count)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_search, bench_filter, bench_cursor);
criterion_main!(benches);
