use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use path_core::{
    search::{dijkstra::Dijkstra, heap_dijkstra::HeapDijkstra},
    util::test_graphs::{sample_graph, SAMPLE_DESTINATION, SAMPLE_SOURCE},
};

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

pub fn criterion_benchmark(c: &mut Criterion) {
    let sample = sample_graph();
    let source = SAMPLE_SOURCE.to_string();
    let destination = SAMPLE_DESTINATION.to_string();

    c.bench_with_input(
        BenchmarkId::new("dijkstra_on_sample_graph", stringify!(sample)),
        &sample,
        |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                black_box(dijkstra.search(&source, &destination));
            })
        },
    );

    c.bench_with_input(
        BenchmarkId::new("heap_dijkstra_on_sample_graph", stringify!(sample)),
        &sample,
        |b, g| {
            b.iter(|| {
                let mut dijkstra = HeapDijkstra::new(g);
                black_box(dijkstra.search(&source, &destination));
            })
        },
    );
}
