//! Tests for the adjacency-list and adjacency-matrix representations.

use super::adjacency_list::AdjacencyList;
use super::adjacency_matrix::AdjacencyMatrix;
use super::types::Edge;
use crate::error::Error;

fn edges(pairs: &[(usize, usize)]) -> Vec<Edge> {
    pairs.iter().copied().map(Edge::from).collect()
}

// ── Adjacency list ─────────────────────────────────────────────────

#[test]
fn test_list_is_symmetric_in_insertion_order() {
    let list = AdjacencyList::from_edges(&edges(&[(0, 2), (0, 1), (2, 1)]), 3).unwrap();
    assert_eq!(list.vertex_count(), 3);
    assert_eq!(list.neighbors(0), &[2, 1]);
    assert_eq!(list.neighbors(1), &[0, 2]);
    assert_eq!(list.neighbors(2), &[0, 1]);
    assert!(list.contains(1, 2) && list.contains(2, 1));
}

#[test]
fn test_list_keeps_duplicate_edges() {
    let list = AdjacencyList::from_edges(&edges(&[(0, 1), (1, 0)]), 2).unwrap();
    assert_eq!(list.neighbors(0), &[1, 1]);
    assert_eq!(list.degree(1), 2);
}

#[test]
fn test_list_out_of_range_neighbors_empty() {
    let list = AdjacencyList::from_edges(&[], 2).unwrap();
    assert!(list.neighbors(0).is_empty());
    assert!(list.neighbors(5).is_empty());
}

#[test]
fn test_list_rejects_invalid_vertex() {
    let err = AdjacencyList::from_edges(&edges(&[(0, 1), (1, 3)]), 3).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidVertexId {
            vertex: 3,
            vertex_count: 3
        }
    ));
}

#[test]
fn test_list_render_sorts_neighbors() {
    let list = AdjacencyList::from_edges(&edges(&[(0, 2), (0, 1)]), 3).unwrap();
    assert_eq!(list.render(), "vertex 0 : 1 2 vertex 1 : 0 vertex 2 : 0 ");
    // Rendering leaves insertion order intact.
    assert_eq!(list.neighbors(0), &[2, 1]);
    assert_eq!(list.to_string(), "vertex 0 : 2 1 vertex 1 : 0 vertex 2 : 0 ");
}

#[test]
fn test_list_sort_neighbors_in_place() {
    let mut list = AdjacencyList::from_edges(&edges(&[(1, 3), (1, 0), (1, 2)]), 4).unwrap();
    list.sort_neighbors();
    assert_eq!(list.neighbors(1), &[0, 2, 3]);
    assert_eq!(list, list.sorted());
}

#[test]
fn test_list_render_empty_vertices() {
    let list = AdjacencyList::from_edges(&[], 2).unwrap();
    assert_eq!(list.render(), "vertex 0 : vertex 1 : ");
}

// ── Adjacency matrix ───────────────────────────────────────────────

#[test]
fn test_matrix_sets_both_cells() {
    let matrix = AdjacencyMatrix::from_edges(&edges(&[(0, 1), (0, 2)]), 3).unwrap();
    assert_eq!(matrix.vertex_count(), 3);
    assert_eq!(matrix.row(0), &[0, 1, 1]);
    assert_eq!(matrix.row(1), &[1, 0, 0]);
    assert_eq!(matrix.row(2), &[1, 0, 0]);
    assert!(matrix.is_adjacent(2, 0));
    assert!(!matrix.is_adjacent(1, 2));
}

#[test]
fn test_matrix_render_row_major() {
    let matrix = AdjacencyMatrix::from_edges(&edges(&[(0, 1), (0, 2)]), 3).unwrap();
    assert_eq!(matrix.render(), "0 1 1 1 0 0 1 0 0 ");
}

#[test]
fn test_matrix_duplicate_edges_collapse() {
    let matrix = AdjacencyMatrix::from_edges(&edges(&[(0, 1), (1, 0), (0, 1)]), 2).unwrap();
    assert_eq!(matrix.render(), "0 1 1 0 ");
}

#[test]
fn test_matrix_self_loop() {
    let matrix = AdjacencyMatrix::from_edges(&edges(&[(1, 1)]), 2).unwrap();
    assert_eq!(matrix.get(1, 1), Some(1));
    assert_eq!(matrix.get(0, 0), Some(0));
}

#[test]
fn test_matrix_out_of_range_access() {
    let matrix = AdjacencyMatrix::from_edges(&[], 2).unwrap();
    assert_eq!(matrix.get(2, 0), None);
    assert!(matrix.row(2).is_empty());
}

#[test]
fn test_matrix_rejects_invalid_vertex() {
    assert!(AdjacencyMatrix::from_edges(&edges(&[(4, 0)]), 4).is_err());
}

#[test]
fn test_matrix_rejects_overflowing_vertex_count() {
    let vertex_count = usize::MAX / 2;
    let err = AdjacencyMatrix::from_edges(&edges(&[(0, 1)]), vertex_count).unwrap_err();
    assert!(matches!(
        err,
        Error::MatrixTooLarge { vertex_count: n } if n == vertex_count
    ));
}

#[test]
fn test_matrix_rejects_unallocatable_vertex_count() {
    // Product fits in usize but exceeds isize::MAX bytes.
    let vertex_count = (1usize << (usize::BITS / 2)) - 1;
    let err = AdjacencyMatrix::from_edges(&[], vertex_count).unwrap_err();
    assert!(matches!(err, Error::MatrixTooLarge { .. }));
}
