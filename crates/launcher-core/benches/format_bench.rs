//! Criterion benchmarks for the config line format.
//!
//! Every cache miss scans the whole file and every set rewrites it, so both
//! operations should stay linear and cheap for files far larger than a real
//! launcher config.
//!
//! Run with:
//! ```bash
//! cargo bench --package launcher-core --bench format_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use launcher_core::{find_value, parse_entries, render_seeded, upsert, ConfigKey, DefaultEntry};

// ── Fixtures ──────────────────────────────────────────────────────────────────

fn make_document(entries: usize) -> String {
    let defaults: Vec<DefaultEntry> = (0..entries)
        .map(|i| {
            DefaultEntry::new(format!("Key{i}"), format!("Value{i}"))
                .with_comment(format!("Accepted values for Key{i}"))
        })
        .collect();
    render_seeded(&defaults)
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_find_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_value");
    for size in [10usize, 100, 1000] {
        let doc = make_document(size);
        let last = ConfigKey::parse(&format!("key{}", size - 1)).unwrap();
        group.bench_with_input(BenchmarkId::new("last_key", size), &doc, |b, doc| {
            b.iter(|| find_value(black_box(doc), black_box(&last)))
        });
    }
    group.finish();
}

fn bench_parse_entries(c: &mut Criterion) {
    let doc = make_document(1000);
    c.bench_function("parse_entries_1000", |b| {
        b.iter(|| parse_entries(black_box(&doc)))
    });
}

fn bench_upsert(c: &mut Criterion) {
    let mut group = c.benchmark_group("upsert");
    let doc = make_document(1000);
    let existing = ConfigKey::parse("Key500").unwrap();
    let missing = ConfigKey::parse("Missing").unwrap();
    group.bench_function("replace", |b| {
        b.iter(|| upsert(black_box(&doc), black_box(&existing), "Updated"))
    });
    group.bench_function("append", |b| {
        b.iter(|| upsert(black_box(&doc), black_box(&missing), "Added"))
    });
    group.finish();
}

criterion_group!(benches, bench_find_value, bench_parse_entries, bench_upsert);
criterion_main!(benches);
