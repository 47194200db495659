use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_walk_core::{bfs, dfs, Graph};

fn complete_graph(size: usize) -> Graph {
    let mut graph = Graph::with_capacity(size, size.saturating_sub(1));
    for from in 0..size {
        for to in (0..size).filter(|&to| to != from) {
            graph.add_edge_unchecked(from, to);
        }
    }
    graph
}

fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in [100, 500, 1000] {
        let graph = complete_graph(size);

        group.bench_with_input(BenchmarkId::new("dfs", size), &graph, |b, g| {
            b.iter(|| dfs(g, black_box(0)).map(Iterator::count))
        });

        group.bench_with_input(BenchmarkId::new("bfs", size), &graph, |b, g| {
            b.iter(|| bfs(g, black_box(0)).map(Iterator::count))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_traversals);
criterion_main!(benches);
