use chartpath_core::{build, LineShape, PathOptions, Rect, Series, ValueRange, ZeroPolicy};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_values(n: usize) -> Vec<f64> {
    // simple waveform with drift
    (0..n)
        .map(|i| (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_path");
    for &n in &[1_000usize, 10_000usize, 100_000usize] {
        let series = Series::from_values("bench", gen_values(n));
        let rect = Rect::from_size(1024.0, 640.0);
        let range = ValueRange::of_series(&series).expect("finite data");
        for (label, shape) in [("straight", LineShape::Straight), ("curved", LineShape::Curved)] {
            let opts = PathOptions { shape, zero: ZeroPolicy::Include, filled: false };
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{label}_n{n}")),
                &opts,
                |b, &opts| {
                    b.iter(|| {
                        let _ = black_box(build(rect, black_box(&series), range, opts));
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
