//! Path reconstruction over a predecessor map.

use pathway_core::{Cell, Grid, Point, Range};

use crate::pathfinder::NO_PARENT;

/// Walk `parents` back from `end` until a cell without a predecessor, and
/// return the cells from that root to `end` inclusive.
///
/// The walk is capped at one step per cell so a malformed map cannot loop.
pub(crate) fn reconstruct(rng: Range, parents: &[usize], end: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut ci = end;
    while ci != NO_PARENT && path.len() <= parents.len() {
        path.push(rng.point(ci));
        ci = parents[ci];
    }
    path.reverse();
    path
}

/// Total cost of walking `path` on `grid`: the sum of the weights of every
/// entered cell, i.e. all cells but the first. Cells outside the grid
/// contribute nothing.
pub fn path_cost(grid: &Grid, path: &[Point]) -> u32 {
    path.iter()
        .skip(1)
        .filter_map(|&p| grid.at(p))
        .map(Cell::weight)
        .sum()
}
