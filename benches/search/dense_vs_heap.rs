use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use path_core::{
    graph::Connections,
    search::{dijkstra::Dijkstra, heap_dijkstra::HeapDijkstra},
};
use rand::prelude::*;

criterion_group!(benches, dense_vs_heap);
criterion_main!(benches);

/// Random connected graph: a spanning path plus `extra` random connections.
fn random_graph(num_nodes: u32, extra: usize, rng: &mut StdRng) -> Connections<u32> {
    let mut g = Connections::new();
    for node in 1..num_nodes {
        g.insert(node - 1, node, rng.gen_range(1.0..100.0)).unwrap();
    }
    for _ in 0..extra {
        let a = rng.gen_range(0..num_nodes);
        let b = rng.gen_range(0..num_nodes);
        if a != b {
            g.insert(a, b, rng.gen_range(1.0..100.0)).unwrap();
        }
    }
    g
}

fn dense_vs_heap(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    let mut group = c.benchmark_group("dense_vs_heap");
    for num_nodes in [10u32, 50, 100, 200].iter() {
        let g = random_graph(*num_nodes, *num_nodes as usize * 2, &mut rng);
        let target = num_nodes - 1;

        group.bench_with_input(BenchmarkId::new("dense", num_nodes), &g, |b, g| {
            b.iter(|| black_box(Dijkstra::new(g).search(&0, &target)))
        });
        group.bench_with_input(BenchmarkId::new("heap", num_nodes), &g, |b, g| {
            b.iter(|| black_box(HeapDijkstra::new(g).search(&0, &target)))
        });
    }
    group.finish();
}
