use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::seq::SliceRandom;
use sortsteps::prelude::*;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_fast_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Permutation");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(60));

    let mut rng = rand::rng();
    let count = 1_000_000u32;
    let mut input: Vec<u32> = (0..count).collect();
    input.shuffle(&mut rng);

    group.throughput(Throughput::Elements(u64::from(count)));

    // Quadratic sorts would not finish at this size.
    for algorithm in [Algorithm::Merge, Algorithm::Quick, Algorithm::Heap, Algorithm::Shell] {
        group.bench_function(algorithm.name(), |b| {
            b.iter_batched(
                || input.clone(),
                |mut data| algorithm.steps(black_box(&mut data)).drain_count(),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_1m_fast_sorts);
criterion_main!(benches);
