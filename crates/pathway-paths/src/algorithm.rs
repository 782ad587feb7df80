use std::fmt;
use std::str::FromStr;

use pathway_core::Board;

use crate::error::SearchError;
use crate::pathfinder::Pathfinder;
use crate::traversal::Traversal;

/// The traversal algorithms a front-end can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Dijkstra,
    Bfs,
    Dfs,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Dijkstra, Algorithm::Bfs, Algorithm::Dfs];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        }
    }

    /// Whether the algorithm always finds the cheapest path.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Algorithm::Dijkstra)
    }

    /// Run on `board` with a fresh [`Pathfinder`].
    pub fn run(self, board: &Board) -> Result<Traversal, SearchError> {
        Pathfinder::for_grid(board.grid()).run_board(self, board)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SearchError::UnknownAlgorithm(s.to_string()))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Algorithm::Bfs).unwrap(), "\"bfs\"");
        let a: Algorithm = serde_json::from_str("\"dijkstra\"").unwrap();
        assert_eq!(a, Algorithm::Dijkstra);
    }
}
