// Assembly pipeline benchmarks
// Criterion-based benchmarking for composition, graph construction, and
// reconstruction on seeded synthetic sequences.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use genome_forge::{build_de_bruijn, kmer_composition, reconstruct};

/// Generate a synthetic DNA sequence for benchmarking
fn generate_synthetic_sequence(length: usize, seed: u64) -> String {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(seed);
    let bases = b"ACGT";
    (0..length)
        .map(|_| bases[rng.gen_range(0..4)] as char)
        .collect()
}

fn bench_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmer_composition");

    for length in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Bytes(*length as u64));
        let sequence = generate_synthetic_sequence(*length, 42);

        group.bench_with_input(BenchmarkId::from_parameter(length), length, |b, _| {
            b.iter(|| kmer_composition(black_box(&sequence), black_box(21)));
        });
    }
    group.finish();
}

fn bench_graph_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("de_bruijn_build");

    for length in [1_000, 10_000].iter() {
        let sequence = generate_synthetic_sequence(*length, 42);
        let kmers = kmer_composition(&sequence, 21);
        group.throughput(Throughput::Elements(kmers.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(length), length, |b, _| {
            b.iter(|| build_de_bruijn(black_box(&kmers)).unwrap());
        });
    }
    group.finish();
}

fn bench_reconstruction(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_reconstruction");

    // k = 31 keeps the (k-1)-mers of a seeded random sequence unique, so
    // the graph stays a single simple path
    for length in [1_000, 10_000].iter() {
        let sequence = generate_synthetic_sequence(*length, 7);
        let kmers = kmer_composition(&sequence, 31);
        let graph = build_de_bruijn(&kmers).unwrap();
        let edges = graph.edges();
        group.throughput(Throughput::Elements(edges.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(length), length, |b, _| {
            b.iter(|| reconstruct(black_box(&edges)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_composition,
    bench_graph_construction,
    bench_reconstruction
);
criterion_main!(benches);
