use criterion::{criterion_group, criterion_main, Criterion};
use geomio::formats::xyz::{self, LabelMode};
use std::fmt::Write;
use std::hint::black_box;
use std::time::Duration;

fn synthetic_xyz(n_atoms: usize) -> String {
    let mut text = format!("{n_atoms}\nsynthetic conformer\n");
    for i in 0..n_atoms {
        let f = i as f64;
        writeln!(text, "C {:.6} {:.6} {:.6}", f * 0.1, f * -0.05, f * 0.025).unwrap();
    }
    text
}

fn criterion_benchmark(c: &mut Criterion) {
    let text = synthetic_xyz(1000);
    let geometry = xyz::parse(&text);

    let mut group = c.benchmark_group("my_group");
    group.measurement_time(Duration::from_secs(6));
    group.bench_function("parse 1000 atom xyz", |b| {
        b.iter(|| black_box(xyz::parse(black_box(&text))))
    });
    group.bench_function("format 1000 atom xyz", |b| {
        b.iter(|| black_box(xyz::format(black_box(&geometry), 6, LabelMode::Symbol)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
