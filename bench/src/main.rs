use std::time::{Duration, Instant};

use graph_walk_core::{Graph, NodeId};
use graph_walk_ffi::{
    gw_graph_add_edge_unchecked, gw_graph_bfs, gw_graph_create, gw_graph_destroy, gw_graph_dfs,
    gw_node_buffer_free, GwGraph, GwNodeBuffer,
};

/// Complete graphs have n² edges; larger requests are clamped to this.
const COMPLETE_MAX_NODES: u64 = 3_000;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: graph-walk-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!(
            "  complete    Every ordered pair connected (clamped to {COMPLETE_MAX_NODES} nodes)"
        );
        println!("  chain       Single directed path 0 -> 1 -> ... -> n-1");
        println!("  star        Hub 0 pointing at every other node");
        println!("  tree        Ternary tree filled level by level from 0");
        println!("  random      Erdos-Renyi uniform random edges");
        println!();
        println!("Default node_count: 1000000");
        return;
    }

    if node_count == 0 {
        eprintln!("node_count must be at least 1");
        return;
    }

    println!("graph-walk-bench");
    println!("================");
    println!();

    let Some(generators) = generators_for(mode) else {
        eprintln!("Unknown mode: {}. Use --help for options.", mode);
        return;
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

type Generator = fn(u64) -> Graph;

/// Generators selected by a mode name, or `None` for an unknown mode.
fn generators_for(mode: &str) -> Option<Vec<(&'static str, Generator)>> {
    let all: [(&str, &'static str, Generator); 5] = [
        ("complete", "Complete digraph", gen_complete),
        ("chain", "Chain", gen_chain),
        ("star", "Star", gen_star),
        ("tree", "Ternary tree", gen_tree),
        ("random", "Erdos-Renyi random", gen_random),
    ];

    if mode == "all" {
        return Some(all.iter().map(|&(_, name, g)| (name, g)).collect());
    }
    all.iter()
        .find(|(key, _, _)| *key == mode)
        .map(|&(_, name, g)| vec![(name, g)])
}

fn run_benchmark(name: &str, generator: Generator, node_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let graph = generator(node_count);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s — {} nodes, {} edges, ~{:.0}MB",
        gen_time.as_secs_f64(),
        graph.order(),
        graph.size(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    let handle = mirror_through_ffi(&graph);

    println!();
    println!("{:>10} {:>10} {:>12} {:>10}", "algorithm", "path", "visited", "time");
    println!("{:->10} {:->10} {:->12} {:->10}", "", "", "", "");

    report("dfs", "core", || {
        graph_walk_core::dfs(&graph, 0).map_or(0, Iterator::count)
    });
    report("bfs", "core", || {
        graph_walk_core::bfs(&graph, 0).map_or(0, Iterator::count)
    });
    report("dfs", "ffi", || unsafe { ffi_visit(gw_graph_dfs, handle) });
    report("bfs", "ffi", || unsafe { ffi_visit(gw_graph_bfs, handle) });

    unsafe { gw_graph_destroy(handle) };
    println!();
}

fn report(algorithm: &str, path: &str, run: impl FnOnce() -> usize) {
    let t = Instant::now();
    let visited = run();
    println!(
        "{:>10} {:>10} {:>12} {:>8.1}ms",
        algorithm,
        path,
        visited,
        millis(t.elapsed())
    );
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Rebuild `graph` behind a C handle, edge by edge, as a foreign caller would.
fn mirror_through_ffi(graph: &Graph) -> *mut GwGraph {
    let handle = gw_graph_create(graph.order());
    for (from, to) in graph.edges() {
        unsafe { gw_graph_add_edge_unchecked(handle, from, to) };
    }
    handle
}

unsafe fn ffi_visit(
    walk: unsafe extern "C" fn(*const GwGraph, NodeId, *mut GwNodeBuffer) -> i32,
    handle: *const GwGraph,
) -> usize {
    let mut out = GwNodeBuffer::empty();
    let visited = if walk(handle, 0, &mut out) == 0 { out.len } else { 0 };
    gw_node_buffer_free(out);
    visited
}

// ---------------------------------------------------------------------------
// Generators: deterministic, single-threaded, every node reachable from node 0
// except in the random graph
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

/// Complete digraph: every node points at every other node.
///
/// Worst case for visited-set pressure: each pop scans n - 1 neighbors.
fn gen_complete(node_count: u64) -> Graph {
    let n = node_count.min(COMPLETE_MAX_NODES) as usize;
    let mut graph = Graph::with_capacity(n, n.saturating_sub(1));
    for from in 0..n {
        for to in (0..n).filter(|&to| to != from) {
            graph.add_edge_unchecked(from, to);
        }
    }
    graph
}

/// Single path: one node in flight at a time.
fn gen_chain(node_count: u64) -> Graph {
    let n = node_count as usize;
    let mut graph = Graph::with_capacity(n, 1);
    for i in 1..n {
        graph.add_edge_unchecked(i - 1, i);
    }
    graph
}

/// Hub with one edge to every other node: a single pop fills the whole
/// stack or queue.
fn gen_star(node_count: u64) -> Graph {
    let n = node_count as usize;
    let mut graph = Graph::new(n);
    for leaf in 1..n {
        graph.add_edge_unchecked(0, leaf);
    }
    graph
}

/// Ternary tree filled level by level: log-depth paths with exponential
/// width, so the BFS queue and DFS stack grow very differently.
fn gen_tree(node_count: u64) -> Graph {
    let n = node_count as usize;
    let branching = 3usize;
    let mut graph = Graph::with_capacity(n, branching);

    let mut next_id = 1usize;
    let mut frontier: Vec<usize> = vec![0];

    while next_id < n && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= n {
                    break;
                }
                graph.add_edge_unchecked(parent, next_id);
                next_frontier.push(next_id);
                next_id += 1;
            }
        }
        frontier = next_frontier;
    }

    graph
}

/// Erdos-Renyi: uniform random edges, ~10 per node on average.
/// Baseline topology with no structure.
fn gen_random(node_count: u64) -> Graph {
    let target_edges = node_count * 10;
    let mut graph = Graph::with_capacity(node_count as usize, 10);
    let mut rng = FastRng::new(54321);

    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            graph.add_edge_unchecked(from as usize, to as usize);
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_mode_resolves() {
        for mode in ["complete", "chain", "star", "tree", "random"] {
            let gens = generators_for(mode).unwrap();
            assert_eq!(gens.len(), 1, "mode {mode}");
        }
        assert_eq!(generators_for("all").unwrap().len(), 5);
        assert!(generators_for("dla").is_none());
    }

    #[test]
    fn test_star_shape() {
        let g = gen_star(6);
        assert_eq!(g.order(), 6);
        assert_eq!(g.neighbors(0), &[1, 2, 3, 4, 5]);
        assert!((1..6).all(|leaf| g.neighbors(leaf).is_empty()));
        assert_eq!(graph_walk_core::bfs_order(&g, 0).unwrap().nodes_visited, 6);
    }

    #[test]
    fn test_tree_shape() {
        let g = gen_tree(13);
        assert_eq!(g.order(), 13);
        assert_eq!(g.size(), 12);
        assert_eq!(g.neighbors(0), &[1, 2, 3]);
        assert_eq!(g.neighbors(1), &[4, 5, 6]);
        let order = graph_walk_core::bfs_order(&g, 0).unwrap().order;
        assert_eq!(order, (0..13).collect::<Vec<_>>());
    }

    #[test]
    fn test_generators_reach_whole_graph() {
        for make in [gen_complete, gen_chain, gen_star, gen_tree] {
            let g = make(40);
            assert_eq!(graph_walk_core::dfs_order(&g, 0).unwrap().nodes_visited, g.order());
        }
    }
}
