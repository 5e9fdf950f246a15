use criterion::{black_box, criterion_group, criterion_main, Criterion};
use display_config_reader::{decode_refresh_rate, ModeInfo, Rational, RawModeInfo};

fn benchmark_decode(c: &mut Criterion) {
    c.bench_function("decode_refresh_rate", |b| {
        b.iter(|| decode_refresh_rate(black_box(Rational::new(60000, 1001))));
    });

    let raw = RawModeInfo::default();
    c.bench_function("decode_mode_info", |b| {
        b.iter(|| ModeInfo::decode(black_box(&raw)));
    });
}

criterion_group!(benches, benchmark_decode);
criterion_main!(benches);
