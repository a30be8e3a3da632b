use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{distributions::Alphanumeric, Rng};

use seqratio::distance;

fn generate(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Ratcliff-Obershelp");

    for i in (2..64).step_by(2) {
        let s1 = generate(i);
        let s2 = generate(i);

        group.bench_with_input(BenchmarkId::new("seqratio", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(distance::ratcliff_obershelp::normalized_similarity(
                    val.0.bytes(),
                    val.1.bytes(),
                    None,
                    None,
                ));
            });
        });

        group.bench_with_input(BenchmarkId::new("strsim", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(strsim::sorensen_dice(val.0, val.1));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
