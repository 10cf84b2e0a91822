//! Edge-list text parsing.
//!
//! One edge per line, written `(u, v)`. Parentheses are optional and the
//! endpoints may be separated by a comma, whitespace, or both. Blank lines
//! and lines starting with `#` are skipped.
//!
//! ```rust
//! use graphwalk_core::edge_source::parse_edges;
//! use graphwalk_core::graph::Edge;
//!
//! let edges = parse_edges("(0, 1)\n# comment\n1 2\n").unwrap();
//! assert_eq!(edges, vec![Edge::new(0, 1), Edge::new(1, 2)]);
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Edge;

/// Parses every edge in `text`.
///
/// # Errors
///
/// Returns `Error::Parse` with the 1-based line number of the first
/// malformed line.
pub fn parse_edges(text: &str) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let edge = parse_edge(line).map_err(|message| Error::Parse {
            line: index + 1,
            message,
        })?;
        edges.push(edge);
    }
    Ok(edges)
}

/// Reads and parses an edge-list file.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read and `Error::Parse` for
/// malformed content.
pub fn read_edges(path: impl AsRef<Path>) -> Result<Vec<Edge>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let edges = parse_edges(&text)?;
    debug!(path = %path.display(), edges = edges.len(), "edge list read");
    Ok(edges)
}

fn parse_edge(line: &str) -> std::result::Result<Edge, String> {
    let body = match line.strip_prefix('(') {
        Some(rest) => rest
            .strip_suffix(')')
            .ok_or_else(|| format!("unclosed parenthesis in {line:?}"))?,
        None => line,
    };

    let mut fields = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty());
    let (Some(u), Some(v), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(format!("expected two vertex ids in {line:?}"));
    };

    Ok(Edge::new(parse_vertex(u)?, parse_vertex(v)?))
}

fn parse_vertex(field: &str) -> std::result::Result<usize, String> {
    field
        .parse()
        .map_err(|_| format!("invalid vertex id {field:?}"))
}
