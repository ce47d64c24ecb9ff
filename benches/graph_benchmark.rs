use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use spoke::{connected_components, DenseGraph, Graph, SparseGraph};

fn random_pairs(vertices: usize, count: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.gen_range(0..vertices), rng.gen_range(0..vertices)))
        .collect()
}

fn bench_random_build(c: &mut Criterion) {
    let vertices = 1000;
    let pairs = random_pairs(vertices, vertices, 0x5EED);

    c.bench_function("dense_random_build", |b| {
        b.iter(|| {
            let mut g = DenseGraph::with_vertices(vertices).unwrap();
            for &(v, w) in &pairs {
                g.add_bi(v, w).unwrap();
            }
            black_box(g.edge_count())
        });
    });

    c.bench_function("sparse_random_build", |b| {
        b.iter(|| {
            let mut g = SparseGraph::with_vertices(vertices);
            for &(v, w) in &pairs {
                g.add_bi(v, w).unwrap();
            }
            black_box(g.edge_count())
        });
    });
}

fn bench_components(c: &mut Criterion) {
    let vertices = 1000;
    let pairs = random_pairs(vertices, vertices, 0x5EED);

    let mut dense = DenseGraph::with_vertices(vertices).unwrap();
    let mut sparse = SparseGraph::with_vertices(vertices);
    for &(v, w) in &pairs {
        dense.add_bi(v, w).unwrap();
        sparse.add_bi(v, w).unwrap();
    }

    c.bench_function("dense_components", |b| {
        b.iter(|| black_box(connected_components(&dense).unwrap().count()));
    });

    c.bench_function("sparse_components", |b| {
        b.iter(|| black_box(connected_components(&sparse).unwrap().count()));
    });
}

fn bench_chain_traversal(c: &mut Criterion) {
    let vertices = 1000;

    // Chain: 0-1-...-N, one long component, worst case for the stack depth
    // a recursive formulation would have needed.
    let mut dense = DenseGraph::with_vertices(vertices).unwrap();
    let mut sparse = SparseGraph::with_vertices(vertices);
    for v in 0..vertices - 1 {
        dense.add_bi(v, v + 1).unwrap();
        sparse.add_bi(v, v + 1).unwrap();
    }

    c.bench_function("dense_chain_components", |b| {
        b.iter(|| black_box(connected_components(&dense).unwrap().count()));
    });

    c.bench_function("sparse_chain_components", |b| {
        b.iter(|| black_box(connected_components(&sparse).unwrap().count()));
    });
}

criterion_group!(
    benches,
    bench_random_build,
    bench_components,
    bench_chain_traversal
);
criterion_main!(benches);
