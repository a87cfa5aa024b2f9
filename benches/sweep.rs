use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagesim::{replay, sweep_with_sink, PolicyKind, ProgressEvent, ProgressSink, WorkloadSpec};

struct NullSink;

impl ProgressSink for NullSink {
    fn record(&self, _event: &ProgressEvent) {}
}

fn bench_replay(c: &mut Criterion) {
    let refs = WorkloadSpec::HotCold {
        references: 10_000,
        pages: 100,
    }
    .generate(42)
    .unwrap();

    let mut group = c.benchmark_group("replay");
    for capacity in [4usize, 16, 64] {
        for kind in [PolicyKind::Fifo, PolicyKind::aging(8)] {
            group.bench_with_input(
                BenchmarkId::new(kind.name(), capacity),
                &capacity,
                |b, &capacity| b.iter(|| replay(&kind, black_box(&refs), capacity).unwrap()),
            );
        }
    }
    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let refs = WorkloadSpec::HotCold {
        references: 1000,
        pages: 100,
    }
    .generate(42)
    .unwrap();

    c.bench_function("sweep_aging_20", |b| {
        b.iter(|| sweep_with_sink(&PolicyKind::aging(8), black_box(&refs), 20, &NullSink).unwrap())
    });
}

criterion_group!(benches, bench_replay, bench_sweep);
criterion_main!(benches);
