//! Start-to-goal path search (DFS/BFS) over an adjacency list.
//!
//! Both searches share one iterative loop parameterized by a
//! [`Frontier`]: a LIFO stack for DFS, a FIFO queue for BFS. The frontier
//! also decides how parent pointers are recorded, which is the only other
//! difference between the two.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};

use super::adjacency_list::AdjacencyList;
use super::path::{format_path, format_visited, reconstruct_path};
use super::types::check_vertex;

/// Trait for path search, any adjacency store can implement this.
pub trait Neighbors {
    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the neighbors of `vertex` in the order they should be explored.
    ///
    /// Every returned id must be below [`Neighbors::vertex_count`].
    fn neighbors_of(&self, vertex: usize) -> &[usize];
}

impl Neighbors for AdjacencyList {
    fn vertex_count(&self) -> usize {
        AdjacencyList::vertex_count(self)
    }

    fn neighbors_of(&self, vertex: usize) -> &[usize] {
        self.neighbors(vertex)
    }
}

/// Traversal strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Depth-first, stack frontier.
    DepthFirst,
    /// Breadth-first, queue frontier.
    BreadthFirst,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthFirst => f.write_str("dfs"),
            Self::BreadthFirst => f.write_str("bfs"),
        }
    }
}

/// Pending-work structure of a traversal.
pub trait Frontier {
    /// Adds a vertex to the frontier.
    fn push(&mut self, vertex: usize);

    /// Removes the next vertex to expand.
    fn pop(&mut self) -> Option<usize>;

    /// Records that `parent` discovered the vertex owning `slot`.
    fn record_parent(slot: &mut Option<usize>, parent: usize);
}

/// LIFO frontier. Every rediscovery overwrites the parent pointer.
#[derive(Debug, Default)]
pub struct StackFrontier(Vec<usize>);

impl Frontier for StackFrontier {
    fn push(&mut self, vertex: usize) {
        self.0.push(vertex);
    }

    fn pop(&mut self) -> Option<usize> {
        self.0.pop()
    }

    fn record_parent(slot: &mut Option<usize>, parent: usize) {
        *slot = Some(parent);
    }
}

/// FIFO frontier. The first discoverer keeps the parent pointer.
#[derive(Debug, Default)]
pub struct QueueFrontier(VecDeque<usize>);

impl Frontier for QueueFrontier {
    fn push(&mut self, vertex: usize) {
        self.0.push_back(vertex);
    }

    fn pop(&mut self) -> Option<usize> {
        self.0.pop_front()
    }

    fn record_parent(slot: &mut Option<usize>, parent: usize) {
        slot.get_or_insert(parent);
    }
}

/// Outcome of one start-to-goal search.
///
/// Holds the visitation order and parent pointers whether or not the goal
/// was reached, so a failed search still reports what it explored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversal {
    strategy: Strategy,
    start: usize,
    goal: usize,
    visited_order: Vec<usize>,
    parents: Vec<Option<usize>>,
    found: bool,
}

impl Traversal {
    /// Returns the strategy that produced this traversal.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the start vertex.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the goal vertex.
    #[must_use]
    pub fn goal(&self) -> usize {
        self.goal
    }

    /// Returns vertices in the order they were popped from the frontier.
    #[must_use]
    pub fn visited_order(&self) -> &[usize] {
        &self.visited_order
    }

    /// Returns the parent pointer of every vertex.
    #[must_use]
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// Returns true when the goal was reached.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.found
    }

    /// Returns the start-to-goal path.
    ///
    /// # Errors
    ///
    /// Returns `Error::GoalUnreachable`, carrying the partial visitation
    /// order, when the frontier was exhausted before reaching the goal.
    pub fn path(&self) -> Result<Vec<usize>> {
        let path = if self.found {
            reconstruct_path(&self.parents, self.start, self.goal)
        } else {
            None
        };
        path.ok_or_else(|| Error::GoalUnreachable {
            start: self.start,
            goal: self.goal,
            visited: self.visited_order.clone(),
        })
    }

    /// Renders `"visited: ... path: ..."`.
    ///
    /// # Errors
    ///
    /// Same as [`Traversal::path`].
    pub fn render(&self) -> Result<String> {
        let path = self.path()?;
        Ok(format!(
            "{} {}",
            format_visited(&self.visited_order),
            format_path(&path)
        ))
    }
}

/// Depth-first search from `start` to `goal`.
///
/// # Errors
///
/// Returns `Error::InvalidVertexId` if `start` or `goal` is out of range.
pub fn dfs<G: Neighbors>(graph: &G, start: usize, goal: usize) -> Result<Traversal> {
    walk(graph, start, goal, StackFrontier::default(), Strategy::DepthFirst)
}

/// Breadth-first search from `start` to `goal`.
///
/// Parent pointers follow first discovery, so the path has the minimum
/// number of edges.
///
/// # Errors
///
/// Returns `Error::InvalidVertexId` if `start` or `goal` is out of range.
pub fn bfs<G: Neighbors>(graph: &G, start: usize, goal: usize) -> Result<Traversal> {
    walk(graph, start, goal, QueueFrontier::default(), Strategy::BreadthFirst)
}

/// Runs the search selected by `strategy`.
pub fn search<G: Neighbors>(
    graph: &G,
    strategy: Strategy,
    start: usize,
    goal: usize,
) -> Result<Traversal> {
    match strategy {
        Strategy::DepthFirst => dfs(graph, start, goal),
        Strategy::BreadthFirst => bfs(graph, start, goal),
    }
}

/// Shared search loop.
///
/// The goal test runs against the most recently popped vertex, so a search
/// with `start == goal` stops before popping anything. Vertices already
/// visited are skipped when popped again.
fn walk<G: Neighbors, F: Frontier>(
    graph: &G,
    start: usize,
    goal: usize,
    mut frontier: F,
    strategy: Strategy,
) -> Result<Traversal> {
    let vertex_count = graph.vertex_count();
    check_vertex(start, vertex_count)?;
    check_vertex(goal, vertex_count)?;

    let mut visited = vec![false; vertex_count];
    let mut parents = vec![None; vertex_count];
    let mut visited_order = Vec::new();

    frontier.push(start);
    let mut current = start;
    let found = loop {
        if current == goal {
            break true;
        }
        let Some(next) = frontier.pop() else {
            break false;
        };
        if visited[next] {
            continue;
        }

        current = next;
        visited[current] = true;
        visited_order.push(current);
        trace!(%strategy, vertex = current, "expand");

        for &neighbor in graph.neighbors_of(current) {
            if !visited[neighbor] {
                frontier.push(neighbor);
                F::record_parent(&mut parents[neighbor], current);
            }
        }
    };

    debug!(
        %strategy,
        start,
        goal,
        found,
        visited = visited_order.len(),
        "traversal finished"
    );

    Ok(Traversal {
        strategy,
        start,
        goal,
        visited_order,
        parents,
        found,
    })
}
