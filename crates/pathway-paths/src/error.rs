use thiserror::Error;

use pathway_core::Point;

/// Errors reported by a traversal run.
///
/// An unreachable end cell is not an error: the run succeeds and
/// [`Traversal::reached`](crate::Traversal::reached) is `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("start {0} is outside the grid")]
    StartOutOfBounds(Point),

    #[error("end {0} is outside the grid")]
    EndOutOfBounds(Point),

    #[error("unknown algorithm `{0}` (expected dijkstra, bfs or dfs)")]
    UnknownAlgorithm(String),
}
