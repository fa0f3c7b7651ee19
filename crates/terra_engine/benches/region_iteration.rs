//! Benchmarks for iterating the positions of each region shape
//!
//! Iteration scans the bounding box and filters by containment, so the
//! shapes with expensive containment tests (polygons) dominate.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use terra_engine::{Region, Vector};

// ============================================================================
// Test data creation helpers
// ============================================================================

fn create_regions(size: i32) -> Vec<(&'static str, Region)> {
    let half = size / 2;
    vec![
        ("rectangle", Region::rectangle(Vector::ZERO, Vector::new(size - 1, size - 1))),
        ("ellipse", Region::ellipse(Vector::new(half, half), Vector::new(half, half))),
        (
            "polygon",
            Region::polygon(vec![
                Vector::new(0, 0),
                Vector::new(size, half / 2),
                Vector::new(half, size),
                Vector::new(half / 2, half),
                Vector::new(0, size),
            ])
            .expect("valid polygon"),
        ),
    ]
}

fn bench_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("region_positions");

    for size in [32, 256] {
        for (name, region) in create_regions(size) {
            group.throughput(Throughput::Elements((size * size) as u64));
            group.bench_with_input(BenchmarkId::new(name, format!("{size}x{size}")), &region, |b, r| {
                b.iter(|| black_box(r.positions().count()));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_positions);
criterion_main!(benches);
