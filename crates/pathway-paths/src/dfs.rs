use pathway_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::pathfinder::{NO_PARENT, Pathfinder, is_wall};
use crate::traversal::Traversal;

impl Pathfinder {
    /// Depth-first search from `start` until `end` is popped.
    ///
    /// Uses an explicit stack. Cells are marked visited when popped, and
    /// walls or already-visited cells are discarded at that point. Unvisited
    /// neighbors are pushed in reverse enumeration order so they pop in
    /// forward order, and each push overwrites the neighbor's predecessor:
    /// a cell pushed several times keeps the predecessor of its latest push,
    /// which is also the push that pops first. The recorded distance is the
    /// depth in the resulting search tree.
    pub fn dfs(&mut self, grid: &Grid, start: Point, end: Point) -> Result<Traversal, SearchError> {
        let (si, ei) = self.prepare(grid, start, end)?;

        let mut order = Vec::new();
        let mut stack = vec![si];
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = stack.pop() {
            let cp = self.point(ci);
            if self.nodes[ci].visited || is_wall(grid, cp) {
                continue;
            }

            let parent = self.nodes[ci].parent;
            let depth = if parent == NO_PARENT {
                0
            } else {
                self.nodes[parent].distance + 1
            };
            let n = &mut self.nodes[ci];
            n.visited = true;
            n.distance = depth;
            order.push(ci);
            if ci == ei {
                break;
            }

            for &np in nbuf.cardinal(cp, |n| self.is_open(n)).iter().rev() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                self.nodes[ni].parent = ci;
                stack.push(ni);
            }
        }

        self.nbuf = nbuf;
        Ok(self.finish(Algorithm::Dfs, start, end, &order))
    }
}
