//! Edge and representation types shared by the graph loaders.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An undirected edge between two vertices.
///
/// The endpoints are unordered: `Edge::new(0, 1)` and `Edge::new(1, 0)`
/// describe the same adjacency.
///
/// # Example
///
/// ```rust
/// use graphwalk_core::graph::Edge;
///
/// let edge = Edge::new(0, 2);
/// assert_eq!(edge.endpoints(), (0, 2));
/// assert!(edge.check_bounds(3).is_ok());
/// assert!(edge.check_bounds(2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    u: usize,
    v: usize,
}

impl Edge {
    /// Creates an edge between `u` and `v`.
    #[must_use]
    pub fn new(u: usize, v: usize) -> Self {
        Self { u, v }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    pub fn u(&self) -> usize {
        self.u
    }

    /// Returns the second endpoint as supplied.
    #[must_use]
    pub fn v(&self) -> usize {
        self.v
    }

    /// Returns both endpoints as `(u, v)`.
    #[must_use]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.u, self.v)
    }

    /// Returns true when both endpoints are the same vertex.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.u == self.v
    }

    /// Checks both endpoints against a vertex count.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertexId` for the first endpoint outside
    /// `[0, vertex_count)`.
    pub fn check_bounds(&self, vertex_count: usize) -> Result<()> {
        check_vertex(self.u, vertex_count)?;
        check_vertex(self.v, vertex_count)
    }
}

impl From<(usize, usize)> for Edge {
    fn from((u, v): (usize, usize)) -> Self {
        Self::new(u, v)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.u, self.v)
    }
}

/// Which in-memory representation an operation needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// Sparse vertex -> neighbor sequence.
    AdjacencyList,
    /// Dense vertex x vertex 0/1 grid.
    AdjacencyMatrix,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdjacencyList => f.write_str("adjacency list"),
            Self::AdjacencyMatrix => f.write_str("adjacency matrix"),
        }
    }
}

/// Fails with `InvalidVertexId` unless `vertex < vertex_count`.
pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(Error::InvalidVertexId {
            vertex,
            vertex_count,
        })
    }
}
