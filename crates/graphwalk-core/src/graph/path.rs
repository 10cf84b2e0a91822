//! Path reconstruction and output formatting.

/// Walks parent pointers back from `goal` to `start`.
///
/// Returns the path in start-to-goal order, or `None` when the chain hits a
/// vertex without a parent (or out of range) before reaching `start`. The
/// walk takes at most `parents.len()` steps.
///
/// # Example
///
/// ```rust
/// use graphwalk_core::graph::reconstruct_path;
///
/// let parents = [None, Some(0), Some(1)];
/// assert_eq!(reconstruct_path(&parents, 0, 2), Some(vec![0, 1, 2]));
/// assert_eq!(reconstruct_path(&parents, 2, 0), None);
/// ```
#[must_use]
pub fn reconstruct_path(
    parents: &[Option<usize>],
    start: usize,
    goal: usize,
) -> Option<Vec<usize>> {
    let mut reversed = Vec::new();
    let mut node = goal;
    while node != start {
        if reversed.len() >= parents.len() {
            return None;
        }
        reversed.push(node);
        node = (*parents.get(node)?)?;
    }
    reversed.push(start);
    reversed.reverse();
    Some(reversed)
}

/// Renders `"visited: v1 v2 ..."`.
#[must_use]
pub fn format_visited(visited_order: &[usize]) -> String {
    labelled("visited:", visited_order)
}

/// Renders `"path: v1 v2 ..."`.
#[must_use]
pub fn format_path(path: &[usize]) -> String {
    labelled("path:", path)
}

fn labelled(label: &str, vertices: &[usize]) -> String {
    std::iter::once(label.to_string())
        .chain(vertices.iter().map(ToString::to_string))
        .collect::<Vec<_>>()
        .join(" ")
}
