use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphinv::{connecting_paths, Graph, NodeIndex};

fn bench_connecting_paths(c: &mut Criterion) {
    let mut g = c.benchmark_group("connecting paths");

    for size in [4, 6, 8] {
        g.bench_with_input(
            BenchmarkId::new("complete_graph", size),
            &size,
            |b, size| {
                let graph = Graph::complete(*size);
                b.iter(|| black_box(connecting_paths(&graph, NodeIndex::new(0)).unwrap()))
            },
        );

        g.bench_with_input(BenchmarkId::new("cycle_graph", size), &size, |b, size| {
            let graph = Graph::cycle(*size);
            b.iter(|| black_box(connecting_paths(&graph, NodeIndex::new(0)).unwrap()))
        });
    }
}

fn bench_rainbow_connectivity(c: &mut Criterion) {
    use graphinv::rainbow::{is_graph_rainbow_connected, EdgeColoring, RainbowCriterion};

    let mut g = c.benchmark_group("rainbow connectivity");

    for size in [4, 6, 8] {
        g.bench_with_input(BenchmarkId::new("cycle_graph", size), &size, |b, size| {
            let graph = Graph::cycle(*size);
            let mut coloring = EdgeColoring::new();
            for (i, e) in graph.edge_indices().enumerate() {
                let (u, v) = graph.edge_endpoints(e).unwrap();
                coloring.insert(u, v, i);
            }

            b.iter(|| {
                black_box(
                    is_graph_rainbow_connected(&graph, &coloring, RainbowCriterion::EveryTarget)
                        .unwrap(),
                )
            })
        });
    }
}

criterion_group!(benches, bench_connecting_paths, bench_rainbow_connectivity);
criterion_main!(benches);
