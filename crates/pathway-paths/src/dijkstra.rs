use std::collections::BinaryHeap;

use pathway_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::pathfinder::{Pathfinder, is_wall};
use crate::traversal::Traversal;

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// distance first and, among equal distances, the earliest push.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Open {
    idx: usize,
    dist: u32,
    seq: u64,
}

impl Ord for Open {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Pathfinder {
    /// Dijkstra's shortest path from `start` until `end` is finalized.
    ///
    /// Entering a cell costs its weight, so the recorded distance of a
    /// visited cell is the cheapest total cost from `start`. Walls are
    /// discarded when selected and never finalized. The search stops early
    /// once only unreachable cells remain.
    pub fn dijkstra(
        &mut self,
        grid: &Grid,
        start: Point,
        end: Point,
    ) -> Result<Traversal, SearchError> {
        let (si, ei) = self.prepare(grid, start, end)?;

        let mut order = Vec::new();
        let mut open: BinaryHeap<Open> = BinaryHeap::new();
        let mut seq: u64 = 0;

        self.nodes[si].distance = 0;
        open.push(Open {
            idx: si,
            dist: 0,
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = &self.nodes[ci];
            // Skip stale entries.
            if cn.visited || current.dist > cn.distance {
                continue;
            }
            let cp = self.point(ci);
            if is_wall(grid, cp) {
                continue;
            }

            self.nodes[ci].visited = true;
            order.push(ci);
            if ci == ei {
                break;
            }

            for &np in nbuf.cardinal(cp, |n| self.is_open(n)) {
                let (Some(ni), Some(cell)) = (self.idx(np), grid.at(np)) else {
                    continue;
                };
                let tentative = current.dist.saturating_add(cell.weight());
                let n = &mut self.nodes[ni];
                if tentative >= n.distance {
                    continue;
                }
                n.distance = tentative;
                n.parent = ci;
                seq += 1;
                open.push(Open {
                    idx: ni,
                    dist: tentative,
                    seq,
                });
            }
        }

        self.nbuf = nbuf;
        Ok(self.finish(Algorithm::Dijkstra, start, end, &order))
    }
}
