//! Criterion benchmarks for the monotone-chain hull.
//! Focus sizes: n in {16, 128, 1024, 8192}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull2::hull::{compare_points, convex_hull, convex_hull_sorted};
use hull2::rand::{draw_points_disc, DiscCfg, PointCount, ReplayToken};
use nalgebra::Vector2;

fn random_points(n: usize, seed: u64) -> Vec<Vector2<f64>> {
    let cfg = DiscCfg {
        count: PointCount::Fixed(n),
        radius: 100.0,
    };
    draw_points_disc(cfg, ReplayToken { seed, index: 0 })
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[16usize, 128, 1024, 8192] {
        group.bench_with_input(BenchmarkId::new("convex_hull", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 43),
                |pts| {
                    let _hull = convex_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("convex_hull_sorted", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut pts = random_points(n, 44);
                    pts.sort_by(|a, b| compare_points(a, b));
                    pts
                },
                |pts| {
                    let _hull = convex_hull_sorted(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
