//! Sparse adjacency-list representation.

use std::fmt;

use crate::error::Result;

use super::types::Edge;

/// Vertex -> neighbor sequence, undirected.
///
/// Neighbor order is insertion order. Duplicate edges produce duplicate
/// entries and a loop edge `(v, v)` lists `v` twice in its own sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Builds a list of `vertex_count` vertices from `edges`, in input order.
    ///
    /// Every endpoint is validated before anything is allocated.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertexId` if an endpoint is out of range.
    pub fn from_edges(edges: &[Edge], vertex_count: usize) -> Result<Self> {
        for edge in edges {
            edge.check_bounds(vertex_count)?;
        }

        let mut neighbors = vec![Vec::new(); vertex_count];
        for edge in edges {
            let (u, v) = edge.endpoints();
            neighbors[u].push(v);
            neighbors[v].push(u);
        }
        Ok(Self { neighbors })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns the neighbors of `vertex` in insertion order.
    ///
    /// Out-of-range vertices have no neighbors.
    #[must_use]
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.neighbors.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Returns the number of entries in `vertex`'s neighbor sequence.
    #[must_use]
    pub fn degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).len()
    }

    /// Returns true when `b` appears in `a`'s neighbor sequence.
    #[must_use]
    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Sorts every neighbor sequence ascending, in place.
    pub fn sort_neighbors(&mut self) {
        for list in &mut self.neighbors {
            list.sort_unstable();
        }
    }

    /// Returns a copy with every neighbor sequence sorted ascending.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut copy = self.clone();
        copy.sort_neighbors();
        copy
    }

    /// Renders `"vertex i : n1 n2 ... "` for every vertex, neighbors sorted.
    ///
    /// Sorting is applied to a copy; traversal order is unaffected.
    #[must_use]
    pub fn render(&self) -> String {
        self.sorted().to_string()
    }
}

impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, list) in self.neighbors.iter().enumerate() {
            write!(f, "vertex {vertex} : ")?;
            for neighbor in list {
                write!(f, "{neighbor} ")?;
            }
        }
        Ok(())
    }
}
