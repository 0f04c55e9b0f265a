// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation operations.
//!
//! Measures the performance of:
//! - Cyclic navigation (next/previous)
//! - Modal open synchronization
//! - Direct index selection

use criterion::{criterion_group, criterion_main, Criterion};
use ecofly::application::query::gallery::GalleryState;
use std::hint::black_box;

/// Benchmark cyclic navigation through a typical product gallery.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("next_full_cycle", |b| {
        b.iter(|| {
            let mut gallery = GalleryState::new(8);
            for _ in 0..8 {
                gallery.next();
            }
            black_box(&gallery);
        });
    });

    group.bench_function("previous_full_cycle", |b| {
        b.iter(|| {
            let mut gallery = GalleryState::new(8);
            for _ in 0..8 {
                gallery.previous();
            }
            black_box(&gallery);
        });
    });

    group.finish();
}

/// Benchmark modal synchronization and independent modal browsing.
fn bench_modal(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("open_modal_and_browse", |b| {
        b.iter(|| {
            let mut gallery = GalleryState::new(8);
            gallery.next();
            gallery.open_modal();
            gallery.next_modal();
            gallery.previous_modal();
            black_box(gallery.info());
        });
    });

    group.bench_function("select", |b| {
        b.iter(|| {
            let mut gallery = GalleryState::new(8);
            for index in 0..8 {
                gallery.select(index).unwrap();
            }
            black_box(&gallery);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_navigate, bench_modal);
criterion_main!(benches);
