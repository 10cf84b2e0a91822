//! Graph owning the adjacency-list and adjacency-matrix representations.

use tracing::debug;

use crate::error::{Error, Result};

use super::adjacency_list::AdjacencyList;
use super::adjacency_matrix::AdjacencyMatrix;
use super::traversal::{self, Strategy, Traversal};
use super::types::{Edge, Representation};

/// Undirected graph with independently loaded representations.
///
/// A new graph holds no representation. Each loader replaces its own
/// representation from scratch and sets the vertex count; loading one never
/// populates the other. Traversals read the adjacency list only.
///
/// # Example
///
/// ```rust
/// use graphwalk_core::graph::{Edge, Graph};
///
/// let edges = [Edge::new(0, 1), Edge::new(1, 2)];
/// let mut graph = Graph::new();
/// graph.load_adjacency_list(&edges, 3).unwrap();
///
/// let traversal = graph.bfs(0, 2).unwrap();
/// assert_eq!(traversal.render().unwrap(), "visited: 0 1 2 path: 0 1 2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertex_count: usize,
    list: Option<AdjacencyList>,
    matrix: Option<AdjacencyMatrix>,
}

impl Graph {
    /// Creates an empty graph with no representation loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the vertex count set by the most recent load.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns true once `representation` has been loaded.
    #[must_use]
    pub fn is_loaded(&self, representation: Representation) -> bool {
        match representation {
            Representation::AdjacencyList => self.list.is_some(),
            Representation::AdjacencyMatrix => self.matrix.is_some(),
        }
    }

    /// Loads the adjacency list from `edges`.
    ///
    /// On error the graph is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertexId` if an endpoint is out of range.
    pub fn load_adjacency_list(&mut self, edges: &[Edge], vertex_count: usize) -> Result<()> {
        let list = AdjacencyList::from_edges(edges, vertex_count)?;
        debug!(vertex_count, edges = edges.len(), "adjacency list loaded");
        self.vertex_count = vertex_count;
        self.list = Some(list);
        Ok(())
    }

    /// Loads the adjacency matrix from `edges`.
    ///
    /// On error the graph is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertexId` if an endpoint is out of range.
    pub fn load_adjacency_matrix(&mut self, edges: &[Edge], vertex_count: usize) -> Result<()> {
        let matrix = AdjacencyMatrix::from_edges(edges, vertex_count)?;
        debug!(vertex_count, edges = edges.len(), "adjacency matrix loaded");
        self.vertex_count = vertex_count;
        self.matrix = Some(matrix);
        Ok(())
    }

    /// Returns the adjacency list.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnloadedGraph` if it was never loaded.
    pub fn adjacency_list(&self) -> Result<&AdjacencyList> {
        self.list
            .as_ref()
            .ok_or(Error::UnloadedGraph(Representation::AdjacencyList))
    }

    /// Returns the adjacency matrix.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnloadedGraph` if it was never loaded.
    pub fn adjacency_matrix(&self) -> Result<&AdjacencyMatrix> {
        self.matrix
            .as_ref()
            .ok_or(Error::UnloadedGraph(Representation::AdjacencyMatrix))
    }

    /// Renders the adjacency list with neighbors sorted ascending.
    pub fn render_adjacency_list(&self) -> Result<String> {
        Ok(self.adjacency_list()?.render())
    }

    /// Renders the adjacency matrix row-major.
    pub fn render_adjacency_matrix(&self) -> Result<String> {
        Ok(self.adjacency_matrix()?.render())
    }

    /// Depth-first search over the adjacency list.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnloadedGraph` without an adjacency list and
    /// `Error::InvalidVertexId` for an out-of-range start or goal.
    pub fn dfs(&self, start: usize, goal: usize) -> Result<Traversal> {
        traversal::dfs(self.adjacency_list()?, start, goal)
    }

    /// Breadth-first search over the adjacency list.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::dfs`].
    pub fn bfs(&self, start: usize, goal: usize) -> Result<Traversal> {
        traversal::bfs(self.adjacency_list()?, start, goal)
    }

    /// Runs the search selected by `strategy`.
    pub fn traverse(&self, strategy: Strategy, start: usize, goal: usize) -> Result<Traversal> {
        traversal::search(self.adjacency_list()?, strategy, start, goal)
    }
}
