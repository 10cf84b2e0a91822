//! Property-based tests for graph representations and DFS/BFS search.
//!
//! Random small graphs are checked against a brute-force reference:
//! hop distances by repeated edge relaxation.

use std::collections::HashSet;

use graphwalk_core::graph::{AdjacencyList, AdjacencyMatrix, Edge, Graph, Strategy};
use graphwalk_core::Error;
use proptest::{
    collection::vec,
    prelude::{prop_assert, prop_assert_eq, Strategy as _},
    proptest,
    test_runner::Config as ProptestConfig,
};

const MAX_VERTICES: usize = 12;
const MAX_EDGES: usize = 30;

/// `(vertex_count, edges, start, goal)` with every id in range.
fn graph_strategy() -> impl proptest::strategy::Strategy<Value = (usize, Vec<Edge>, usize, usize)>
{
    (1..=MAX_VERTICES).prop_flat_map(|n| {
        (
            proptest::strategy::Just(n),
            vec((0..n, 0..n).prop_map(Edge::from), 0..=MAX_EDGES),
            0..n,
            0..n,
        )
    })
}

/// Hop distances from `start`, `None` when unreachable.
fn hop_distances(n: usize, edges: &[Edge], start: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; n];
    dist[start] = Some(0);
    for _ in 0..n {
        for edge in edges {
            let (u, v) = edge.endpoints();
            for (a, b) in [(u, v), (v, u)] {
                if let Some(d) = dist[a] {
                    if dist[b].is_none_or(|current| d + 1 < current) {
                        dist[b] = Some(d + 1);
                    }
                }
            }
        }
    }
    dist
}

fn load(n: usize, edges: &[Edge]) -> Graph {
    let mut graph = Graph::new();
    graph.load_adjacency_list(edges, n).unwrap();
    graph
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_matrix_is_symmetric((n, edges, _, _) in graph_strategy()) {
        let matrix = AdjacencyMatrix::from_edges(&edges, n).unwrap();
        for u in 0..n {
            for v in 0..n {
                prop_assert_eq!(matrix.get(u, v), matrix.get(v, u));
            }
        }
    }

    #[test]
    fn prop_list_is_symmetric((n, edges, _, _) in graph_strategy()) {
        let list = AdjacencyList::from_edges(&edges, n).unwrap();
        for u in 0..n {
            for &v in list.neighbors(u) {
                prop_assert!(list.contains(v, u));
            }
        }
        let entries: usize = (0..n).map(|u| list.degree(u)).sum();
        prop_assert_eq!(entries, edges.len() * 2);
    }

    #[test]
    fn prop_list_and_matrix_agree((n, edges, _, _) in graph_strategy()) {
        let list = AdjacencyList::from_edges(&edges, n).unwrap();
        let matrix = AdjacencyMatrix::from_edges(&edges, n).unwrap();
        for u in 0..n {
            for v in 0..n {
                prop_assert_eq!(list.contains(u, v), matrix.is_adjacent(u, v));
            }
        }
    }

    #[test]
    fn prop_visited_order_has_no_duplicates((n, edges, start, goal) in graph_strategy()) {
        let graph = load(n, &edges);
        let dist = hop_distances(n, &edges, start);
        for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
            let traversal = graph.traverse(strategy, start, goal).unwrap();
            let unique: HashSet<usize> = traversal.visited_order().iter().copied().collect();
            prop_assert_eq!(unique.len(), traversal.visited_order().len());
            for vertex in traversal.visited_order() {
                prop_assert!(dist[*vertex].is_some());
            }
        }
    }

    #[test]
    fn prop_found_iff_reachable((n, edges, start, goal) in graph_strategy()) {
        let graph = load(n, &edges);
        let reachable = hop_distances(n, &edges, start)[goal].is_some();
        for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
            let traversal = graph.traverse(strategy, start, goal).unwrap();
            prop_assert_eq!(traversal.is_found(), reachable);
            if !reachable {
                // Exhaustion explores the whole component of `start`.
                let component = hop_distances(n, &edges, start)
                    .iter()
                    .filter(|d| d.is_some())
                    .count();
                prop_assert_eq!(traversal.visited_order().len(), component);
                let is_unreachable = matches!(
                    traversal.path(),
                    Err(Error::GoalUnreachable { .. })
                );
                prop_assert!(is_unreachable);
            }
        }
    }

    #[test]
    fn prop_paths_are_valid((n, edges, start, goal) in graph_strategy()) {
        let graph = load(n, &edges);
        let list = graph.adjacency_list().unwrap();
        for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
            let traversal = graph.traverse(strategy, start, goal).unwrap();
            if let Ok(path) = traversal.path() {
                prop_assert_eq!(path.first(), Some(&start));
                prop_assert_eq!(path.last(), Some(&goal));
                for pair in path.windows(2) {
                    prop_assert!(list.contains(pair[0], pair[1]));
                }
            }
        }
    }

    #[test]
    fn prop_bfs_path_is_shortest((n, edges, start, goal) in graph_strategy()) {
        let graph = load(n, &edges);
        let dist = hop_distances(n, &edges, start);
        if let Some(expected) = dist[goal] {
            let path = graph.bfs(start, goal).unwrap().path().unwrap();
            prop_assert_eq!(path.len() - 1, expected);
        }
    }

    #[test]
    fn prop_start_equals_goal((n, edges, start, _) in graph_strategy()) {
        let graph = load(n, &edges);
        for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
            let traversal = graph.traverse(strategy, start, start).unwrap();
            prop_assert!(traversal.visited_order().is_empty());
            prop_assert_eq!(traversal.path().unwrap(), vec![start]);
        }
    }

    #[test]
    fn prop_out_of_range_edges_rejected(n in 1..MAX_VERTICES, extra in 0..5_usize) {
        let edges = [Edge::new(0, n + extra)];
        let mut graph = Graph::new();
        let is_invalid = matches!(
            graph.load_adjacency_list(&edges, n),
            Err(Error::InvalidVertexId { .. })
        );
        prop_assert!(is_invalid);
        prop_assert!(graph.load_adjacency_matrix(&edges, n).is_err());
    }
}

#[test]
fn test_line_and_split_graphs() {
    let line = load(3, &[Edge::new(0, 1), Edge::new(1, 2)]);
    assert_eq!(line.bfs(0, 2).unwrap().visited_order(), &[0, 1, 2]);
    assert_eq!(line.dfs(0, 2).unwrap().path().unwrap(), vec![0, 1, 2]);

    let split = load(4, &[Edge::new(0, 1), Edge::new(2, 3)]);
    match split.bfs(0, 3).unwrap().path() {
        Err(Error::GoalUnreachable { visited, .. }) => assert_eq!(visited, vec![0, 1]),
        other => panic!("expected GoalUnreachable, got {other:?}"),
    }
}
