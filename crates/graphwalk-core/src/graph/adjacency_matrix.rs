//! Dense adjacency-matrix representation.

use std::fmt;

use crate::error::{Error, Result};

use super::types::Edge;

/// Symmetric `n x n` 0/1 grid stored row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    vertex_count: usize,
    cells: Vec<u8>,
}

impl AdjacencyMatrix {
    /// Builds a `vertex_count x vertex_count` grid from `edges`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertexId` if an endpoint is out of range, or
    /// `Error::MatrixTooLarge` if the grid cannot be allocated.
    pub fn from_edges(edges: &[Edge], vertex_count: usize) -> Result<Self> {
        for edge in edges {
            edge.check_bounds(vertex_count)?;
        }

        let too_large = || Error::MatrixTooLarge { vertex_count };
        let len = vertex_count.checked_mul(vertex_count).ok_or_else(too_large)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        cells.resize(len, 0);

        // len fits in usize, so every u * vertex_count + v below is in bounds.
        let mut matrix = Self { vertex_count, cells };
        for edge in edges {
            let (u, v) = edge.endpoints();
            matrix.cells[u * vertex_count + v] = 1;
            matrix.cells[v * vertex_count + u] = 1;
        }
        Ok(matrix)
    }

    /// Returns the number of vertices (rows).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the cell at row `u`, column `v`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, u: usize, v: usize) -> Option<u8> {
        if u < self.vertex_count && v < self.vertex_count {
            Some(self.cells[u * self.vertex_count + v])
        } else {
            None
        }
    }

    /// Returns true when `u` and `v` are adjacent.
    #[must_use]
    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.get(u, v) == Some(1)
    }

    /// Returns row `u`, or an empty slice when out of range.
    #[must_use]
    pub fn row(&self, u: usize) -> &[u8] {
        if u < self.vertex_count {
            &self.cells[u * self.vertex_count..(u + 1) * self.vertex_count]
        } else {
            &[]
        }
    }

    /// Renders every cell row-major, each followed by a single space.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{cell} ")?;
        }
        Ok(())
    }
}
