//! # graphwalk core
//!
//! Undirected graphs over integer vertex ids, stored as an adjacency list
//! and/or an adjacency matrix, with depth-first and breadth-first
//! start-to-goal search.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphwalk_core::edge_source::parse_edges;
//! use graphwalk_core::graph::Graph;
//!
//! fn main() -> graphwalk_core::Result<()> {
//!     let edges = parse_edges("(0, 1)\n(0, 2)\n")?;
//!
//!     let mut graph = Graph::new();
//!     graph.load_adjacency_list(&edges, 3)?;
//!     graph.load_adjacency_matrix(&edges, 3)?;
//!
//!     assert_eq!(
//!         graph.render_adjacency_list()?,
//!         "vertex 0 : 1 2 vertex 1 : 0 vertex 2 : 0 "
//!     );
//!     assert_eq!(graph.render_adjacency_matrix()?, "0 1 1 1 0 0 1 0 0 ");
//!     assert_eq!(graph.dfs(1, 2)?.render()?, "visited: 1 0 2 path: 1 0 2");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod edge_source;
pub mod error;
pub mod graph;

pub use config::WalkConfig;
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Strategy, Traversal};
