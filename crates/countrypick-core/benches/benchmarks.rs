//! Picker hot paths: collation, full organization and search over the
//! embedded catalog.
//!
//! Run with: cargo bench -p countrypick-core

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use countrypick_core::collation::{collate, LatinOrdering};
use countrypick_core::loader::embedded_countries;
use countrypick_core::organizer::organize;
use countrypick_core::search::search;
use countrypick_core::PickerConfig;

fn bench_collate(c: &mut Criterion) {
    let countries = embedded_countries();
    let ordering = LatinOrdering::default();
    c.bench_function("collate_embedded", |b| {
        b.iter(|| collate(black_box(countries), &ordering))
    });
}

fn bench_organize(c: &mut Criterion) {
    let countries = embedded_countries();
    let ordering = LatinOrdering::default();
    let cfg = PickerConfig::default().with_preferred(["US", "GB", "DE"]);
    let recents: Vec<String> = ["FR", "JP", "BR", "IN"].iter().map(|s| s.to_string()).collect();
    c.bench_function("organize_embedded", |b| {
        b.iter(|| organize(&cfg, black_box(countries), &recents, Some("CA"), &ordering))
    });
}

fn bench_search(c: &mut Criterion) {
    let countries = embedded_countries();
    let cfg = PickerConfig::default();
    let mut group = c.benchmark_group("search");
    for query in ["u", "uni", "united states", "+4", "zz"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, q| {
            b.iter(|| search(black_box(q), countries, &cfg))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_collate, bench_organize, bench_search);
criterion_main!(benches);
