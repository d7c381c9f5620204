use criterion::{criterion_group, criterion_main, Criterion};
use minado_core::{GridConfig, MinePlacement, ShufflePlacement};

fn bench_placement(c: &mut Criterion) {
    let expert = GridConfig::new((30, 16), 0.2).expect("valid config");
    let dense = GridConfig::new((100, 100), 0.6).expect("valid config");

    let mut seed = 0u64;
    c.bench_function("place_30x16_20pct", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            ShufflePlacement::new(seed).place(expert)
        })
    });

    c.bench_function("place_100x100_60pct", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            ShufflePlacement::new(seed).place(dense)
        })
    });
}

criterion_group!(benches, bench_placement);
criterion_main!(benches);
