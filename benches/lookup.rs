//! Benchmarks for suffix rule lookups.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use publicsuffix_r::bundled::{bundled_list, source};
use publicsuffix_r::{domain, CachedList, FindOptions, List, ParserOptions};

// ============================================================================
// Helper Functions
// ============================================================================

/// Build a list with the bundled rules plus `extra` generated suffixes.
fn build_list(extra: usize) -> List {
    let mut list = List::parse(source(), &ParserOptions::default());
    let generated: String = (0..extra).map(|i| format!("zone{}.com\n", i)).collect();
    list.load_str(&generated, &ParserOptions::default());
    list
}

const NAMES: &[&str] = &[
    "www.example.com",
    "www.example.co.uk",
    "a.b.test.ck",
    "www.city.kawasaki.jp",
    "foo.blogspot.com",
    "example.unlisted",
];

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    for size in [0usize, 1_000, 10_000] {
        let list = build_list(size);
        group.bench_with_input(BenchmarkId::from_parameter(list.len()), &list, |b, list| {
            b.iter(|| {
                for name in NAMES {
                    black_box(list.find(black_box(name), &FindOptions::default()));
                }
            })
        });
    }
    group.finish();
}

fn bench_domain(c: &mut Criterion) {
    let list = bundled_list();
    c.bench_function("domain/bundled", |b| {
        b.iter(|| {
            for name in NAMES {
                let _ = black_box(domain(list.as_ref(), black_box(name), &FindOptions::default()));
            }
        })
    });

    let cached = CachedList::new(build_list(10_000), 64);
    c.bench_function("domain/cached", |b| {
        b.iter(|| {
            for name in NAMES {
                let _ = black_box(domain(&cached, black_box(name), &FindOptions::default()));
            }
        })
    });
}

criterion_group!(benches, bench_find, bench_domain);
criterion_main!(benches);
