use criterion::{Criterion, criterion_group, criterion_main};
use texgen::{GridSpec, chessboard, uv_map};

fn bench_patterns(c: &mut Criterion) {
    let spec = GridSpec::new(1024, 8).unwrap();

    c.bench_function("chessboard 1024/8", |b| b.iter(|| chessboard(&spec)));
    c.bench_function("uv_map 1024/8", |b| b.iter(|| uv_map(&spec).unwrap()));
}

criterion_group!(benches, bench_patterns);
criterion_main!(benches);
