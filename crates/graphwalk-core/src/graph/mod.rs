//! In-memory undirected graph module.
//!
//! Provides the adjacency-list and adjacency-matrix representations, the
//! [`Graph`] that owns them, and DFS/BFS start-to-goal search.
//!
//! # Example
//!
//! ```rust
//! use graphwalk_core::graph::{Edge, Graph};
//!
//! let edges = [Edge::new(0, 1), Edge::new(2, 3)];
//! let mut graph = Graph::new();
//! graph.load_adjacency_list(&edges, 4).unwrap();
//!
//! let traversal = graph.bfs(0, 3).unwrap();
//! assert!(!traversal.is_found());
//! assert_eq!(traversal.visited_order(), &[0, 1]);
//! assert!(traversal.path().is_err());
//! ```

mod adjacency_list;
mod adjacency_matrix;
mod path;
mod store;
pub mod traversal;
mod types;

#[cfg(test)]
mod adjacency_tests;

pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::AdjacencyMatrix;
pub use path::{format_path, format_visited, reconstruct_path};
pub use store::Graph;
pub use traversal::{Neighbors, Strategy, Traversal};
pub use types::{Edge, Representation};
