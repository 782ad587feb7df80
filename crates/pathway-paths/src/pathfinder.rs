use pathway_core::{Board, Cell, Grid, Point, Range};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::traversal::Traversal;

/// Sentinel distance for cells a run has not reached.
pub const UNREACHABLE: u32 = u32::MAX;

/// Sentinel parent index for cells without a predecessor.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-cell search state
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) visited: bool,
    pub(crate) distance: u32,
    pub(crate) parent: usize,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            visited: false,
            distance: UNREACHABLE,
            parent: NO_PARENT,
        }
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Search-state arena for traversals over a grid rectangle.
///
/// Cells are addressed by their row-major index in the range; each holds a
/// visited flag, a distance and a predecessor index. Every run starts by
/// resetting the whole arena, and the result is copied out into an owned
/// [`Traversal`], so nothing from one run can leak into the next.
pub struct Pathfinder {
    pub(crate) rng: Range,
    pub(crate) nodes: Vec<Node>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Neighbors,
}

impl Pathfinder {
    /// Create a new `Pathfinder` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            nodes: vec![Node::default(); rng.len()],
            nbuf: Neighbors::new(),
        }
    }

    /// Create a `Pathfinder` sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.bounds())
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Replace the underlying range, resizing the arena.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
        self.nodes.clear();
        self.nodes.resize(rng.len(), Node::default());
    }

    /// Return every node to its pre-search state: unvisited, unreachable,
    /// no predecessor.
    pub fn reset(&mut self) {
        self.nodes.fill(Node::default());
    }

    /// Whether no node carries state from a previous run.
    pub fn is_fresh(&self) -> bool {
        self.nodes
            .iter()
            .all(|n| !n.visited && n.distance == UNREACHABLE && n.parent == NO_PARENT)
    }

    /// In-bounds neighbors of `p` not yet visited by the current (or last)
    /// run, in the order up, down, left, right. Walls are included.
    pub fn unvisited_neighbors(&self, p: Point) -> Vec<Point> {
        let mut nb = Neighbors::new();
        nb.cardinal(p, |n| self.is_open(n)).to_vec()
    }

    /// Run `algorithm` from `start` to `end` over `grid`.
    pub fn run(
        &mut self,
        algorithm: Algorithm,
        grid: &Grid,
        start: Point,
        end: Point,
    ) -> Result<Traversal, SearchError> {
        match algorithm {
            Algorithm::Dijkstra => self.dijkstra(grid, start, end),
            Algorithm::Bfs => self.bfs(grid, start, end),
            Algorithm::Dfs => self.dfs(grid, start, end),
        }
    }

    /// Run `algorithm` between the endpoints of `board`.
    pub fn run_board(
        &mut self,
        algorithm: Algorithm,
        board: &Board,
    ) -> Result<Traversal, SearchError> {
        self.run(algorithm, board.grid(), board.start(), board.end())
    }

    // -----------------------------------------------------------------------
    // Run helpers
    // -----------------------------------------------------------------------

    /// Fit the arena to `grid`, reset it, and resolve the endpoint indices.
    pub(crate) fn prepare(
        &mut self,
        grid: &Grid,
        start: Point,
        end: Point,
    ) -> Result<(usize, usize), SearchError> {
        if grid.bounds() != self.rng || self.nodes.len() != self.rng.len() {
            self.set_range(grid.bounds());
        } else {
            self.reset();
        }
        let si = self
            .idx(start)
            .ok_or(SearchError::StartOutOfBounds(start))?;
        let ei = self.idx(end).ok_or(SearchError::EndOutOfBounds(end))?;
        debug_assert!(self.is_fresh());
        Ok((si, ei))
    }

    /// Package the arena and visit order of a finished run.
    pub(crate) fn finish(
        &self,
        algorithm: Algorithm,
        start: Point,
        end: Point,
        order: &[usize],
    ) -> Traversal {
        let traversal = Traversal::from_nodes(algorithm, self.rng, start, end, order, &self.nodes);
        log::debug!(
            "{algorithm}: visited {} of {} cells from {start} to {end}, reached={}",
            order.len(),
            self.nodes.len(),
            traversal.reached()
        );
        traversal
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.rng.index(p)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.rng.point(idx)
    }

    /// In bounds and not yet visited.
    #[inline]
    pub(crate) fn is_open(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| !self.nodes[i].visited)
    }
}

/// Whether `p` is a wall on `grid`.
#[inline]
pub(crate) fn is_wall(grid: &Grid, p: Point) -> bool {
    grid.at(p).is_some_and(Cell::is_wall)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_arena_is_fresh() {
        let pf = Pathfinder::new(Range::sized(4, 5));
        assert_eq!(pf.nodes.len(), 20);
        assert!(pf.is_fresh());
    }

    #[test]
    fn runs_leave_no_state_behind_for_the_next_run() {
        let grid = Grid::new(3, 3);
        let mut pf = Pathfinder::for_grid(&grid);
        let first = pf.bfs(&grid, Point::at(0, 0), Point::at(2, 2)).unwrap();
        assert!(!pf.is_fresh());
        let second = pf.bfs(&grid, Point::at(0, 0), Point::at(2, 2)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn reset_clears_state() {
        let grid = Grid::new(3, 3);
        let mut pf = Pathfinder::for_grid(&grid);
        pf.dfs(&grid, Point::at(0, 0), Point::at(2, 2)).unwrap();
        pf.reset();
        assert!(pf.is_fresh());
    }

    #[test]
    fn arena_follows_grid_size() {
        let mut pf = Pathfinder::new(Range::sized(2, 2));
        let grid = Grid::new(5, 6);
        let t = pf.bfs(&grid, Point::at(0, 0), Point::at(4, 5)).unwrap();
        assert!(t.reached());
        assert_eq!(pf.range(), grid.bounds());
        assert_eq!(pf.nodes.len(), 30);
    }

    #[test]
    fn endpoints_out_of_bounds_are_reported() {
        let grid = Grid::new(3, 3);
        let mut pf = Pathfinder::for_grid(&grid);
        assert_eq!(
            pf.bfs(&grid, Point::at(3, 0), Point::at(0, 0)),
            Err(SearchError::StartOutOfBounds(Point::at(3, 0)))
        );
        assert_eq!(
            pf.dijkstra(&grid, Point::at(0, 0), Point::at(0, -1)),
            Err(SearchError::EndOutOfBounds(Point::at(0, -1)))
        );
    }

    #[test]
    fn unvisited_neighbors_is_a_pure_read() {
        let grid = Grid::new(3, 3);
        let mut pf = Pathfinder::for_grid(&grid);
        let p = Point::at(1, 1);
        let a = pf.unvisited_neighbors(p);
        let b = pf.unvisited_neighbors(p);
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);

        // After a run stopping at (0, 1) only the unvisited side remains.
        pf.bfs(&grid, Point::at(0, 0), Point::at(0, 1)).unwrap();
        assert_eq!(
            pf.unvisited_neighbors(Point::at(1, 1)),
            vec![Point::at(2, 1), Point::at(1, 2)]
        );
    }

    #[test]
    fn walls_are_enumerated_as_neighbors() {
        let mut grid = Grid::new(2, 2);
        grid.set(Point::at(0, 1), Cell::WALL);
        let pf = Pathfinder::for_grid(&grid);
        assert_eq!(
            pf.unvisited_neighbors(Point::at(0, 0)),
            vec![Point::at(1, 0), Point::at(0, 1)]
        );
    }
}
