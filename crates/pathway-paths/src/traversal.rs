use pathway_core::{Point, Range};

use crate::algorithm::Algorithm;
use crate::events::Events;
use crate::path::reconstruct;
use crate::pathfinder::{NO_PARENT, Node};

/// The outcome of one traversal run.
///
/// Owns a copy of the run's predecessor map and distances, indexed by cell,
/// so it stays valid after the [`Pathfinder`](crate::Pathfinder) is reused.
/// Only cells in the visit order count as visited; queries about any other
/// cell return `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    algorithm: Algorithm,
    rng: Range,
    start: Point,
    end: Point,
    order: Vec<Point>,
    finalized: Vec<bool>,
    distances: Vec<u32>,
    parents: Vec<usize>,
}

impl Traversal {
    pub(crate) fn from_nodes(
        algorithm: Algorithm,
        rng: Range,
        start: Point,
        end: Point,
        order: &[usize],
        nodes: &[Node],
    ) -> Self {
        let mut finalized = vec![false; nodes.len()];
        for &i in order {
            finalized[i] = true;
        }
        Self {
            algorithm,
            rng,
            start,
            end,
            order: order.iter().map(|&i| rng.point(i)).collect(),
            finalized,
            distances: nodes.iter().map(|n| n.distance).collect(),
            parents: nodes.iter().map(|n| n.parent).collect(),
        }
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Cells in the order the run finalized them.
    #[inline]
    pub fn visited(&self) -> &[Point] {
        &self.order
    }

    /// Whether the run finalized `p`.
    pub fn is_visited(&self, p: Point) -> bool {
        self.finalized_idx(p).is_some()
    }

    /// Whether the end cell was reached. When `false` the end is
    /// unreachable from the start.
    pub fn reached(&self) -> bool {
        self.is_visited(self.end)
    }

    /// Predecessor of a visited cell on the search tree. `None` for the
    /// start cell and for cells the run did not visit.
    pub fn previous(&self, p: Point) -> Option<Point> {
        let i = self.finalized_idx(p)?;
        match self.parents[i] {
            NO_PARENT => None,
            pi => Some(self.rng.point(pi)),
        }
    }

    /// Distance of a visited cell from the start: total entry cost for
    /// Dijkstra, step count for BFS, tree depth for DFS.
    pub fn distance_at(&self, p: Point) -> Option<u32> {
        self.finalized_idx(p).map(|i| self.distances[i])
    }

    /// Path from the start to `p`, both inclusive, or `None` if the run
    /// did not visit `p`.
    pub fn path_to(&self, p: Point) -> Option<Vec<Point>> {
        let i = self.finalized_idx(p)?;
        Some(reconstruct(self.rng, &self.parents, i))
    }

    /// Path from the start to the end, or `None` if the end is unreachable.
    pub fn path(&self) -> Option<Vec<Point>> {
        self.path_to(self.end)
    }

    /// The run as a replayable stream: every visit, then every path step
    /// when the end was reached.
    pub fn events(&self) -> Events<'_> {
        Events::new(&self.order, self.path().unwrap_or_default())
    }

    fn finalized_idx(&self, p: Point) -> Option<usize> {
        self.rng.index(p).filter(|&i| self.finalized[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pathfinder;
    use pathway_core::{Board, Grid};

    #[test]
    fn queries_ignore_unfinalized_cells() {
        // BFS marks (2, 0) when enqueuing it but stops before dequeuing it.
        let grid = Grid::new(3, 3);
        let t = Pathfinder::for_grid(&grid)
            .bfs(&grid, Point::at(0, 0), Point::at(0, 1))
            .unwrap();
        assert_eq!(
            t.visited(),
            &[Point::at(0, 0), Point::at(1, 0), Point::at(0, 1)]
        );
        assert!(!t.is_visited(Point::at(2, 0)));
        assert_eq!(t.distance_at(Point::at(2, 0)), None);
        assert_eq!(t.previous(Point::at(2, 0)), None);
        assert_eq!(t.path_to(Point::at(2, 0)), None);
        assert_eq!(t.previous(Point::at(0, 1)), Some(Point::at(0, 0)));
        assert_eq!(t.previous(Point::at(0, 0)), None);
    }

    #[test]
    fn path_to_intermediate_cell() {
        let board = Board::from_layout("S...E").unwrap();
        let t = Pathfinder::for_grid(board.grid())
            .run_board(Algorithm::Dijkstra, &board)
            .unwrap();
        assert_eq!(
            t.path_to(Point::at(0, 2)),
            Some(vec![Point::at(0, 0), Point::at(0, 1), Point::at(0, 2)])
        );
        assert_eq!(t.algorithm(), Algorithm::Dijkstra);
        assert_eq!((t.start(), t.end()), (board.start(), board.end()));
    }

    #[test]
    fn outlives_pathfinder_reuse() {
        let board = Board::from_layout("S.\n.E").unwrap();
        let mut pf = Pathfinder::for_grid(board.grid());
        let first = pf.run_board(Algorithm::Bfs, &board).unwrap();
        let other = pf
            .bfs(board.grid(), Point::at(1, 1), Point::at(0, 0))
            .unwrap();
        assert_eq!(first.path().unwrap().first(), Some(&board.start()));
        assert_eq!(other.path().unwrap().first(), Some(&Point::at(1, 1)));
    }
}
