//! Error types for graphwalk-core.

use thiserror::Error;

use crate::graph::Representation;

/// Graph loading and traversal error types.
#[derive(Error, Debug)]
pub enum Error {
    /// A vertex id outside `[0, vertex_count)` was supplied.
    #[error("Invalid vertex id {vertex}: graph has {vertex_count} vertices")]
    InvalidVertexId {
        /// The offending vertex id.
        vertex: usize,
        /// Vertex count of the representation it was checked against.
        vertex_count: usize,
    },

    /// The traversal frontier was exhausted before the goal was reached.
    ///
    /// Carries the partial visitation order accumulated before exhaustion.
    #[error("Goal {goal} is unreachable from {start}")]
    GoalUnreachable {
        /// Start vertex of the traversal.
        start: usize,
        /// Goal vertex that was never reached.
        goal: usize,
        /// Vertices popped from the frontier, in order.
        visited: Vec<usize>,
    },

    /// The requested representation has not been loaded.
    #[error("Graph not loaded: no {0} representation")]
    UnloadedGraph(Representation),

    /// The `vertex_count x vertex_count` grid cannot be allocated.
    #[error("Adjacency matrix for {vertex_count} vertices is too large")]
    MatrixTooLarge {
        /// Requested vertex count.
        vertex_count: usize,
    },

    /// A line of edge-list text could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
