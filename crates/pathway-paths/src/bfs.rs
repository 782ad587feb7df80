use std::collections::VecDeque;

use pathway_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::pathfinder::{Pathfinder, is_wall};
use crate::traversal::Traversal;

impl Pathfinder {
    /// Breadth-first search from `start` until `end` is dequeued.
    ///
    /// Cells are marked visited when enqueued, so each cell enters the
    /// queue at most once and its predecessor is the first cell that
    /// reached it. Walls are never enqueued. Every step costs 1; the
    /// recorded distance is the hop count from `start`.
    pub fn bfs(&mut self, grid: &Grid, start: Point, end: Point) -> Result<Traversal, SearchError> {
        let (si, ei) = self.prepare(grid, start, end)?;

        let mut order = Vec::new();
        let mut queue: VecDeque<usize> = VecDeque::new();
        if !is_wall(grid, start) {
            self.nodes[si].visited = true;
            self.nodes[si].distance = 0;
            queue.push_back(si);
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
            order.push(ci);
            if ci == ei {
                break;
            }

            let cp = self.point(ci);
            let next_dist = self.nodes[ci].distance + 1;
            for &np in nbuf.cardinal(cp, |n| self.is_open(n)) {
                if is_wall(grid, np) {
                    continue;
                }
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let n = &mut self.nodes[ni];
                n.visited = true;
                n.distance = next_dist;
                n.parent = ci;
                queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        Ok(self.finish(Algorithm::Bfs, start, end, &order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathway_core::{Board, Cell};

    fn run(layout: &str) -> Traversal {
        let board = Board::from_layout(layout).unwrap();
        Pathfinder::for_grid(board.grid())
            .run_board(Algorithm::Bfs, &board)
            .unwrap()
    }

    #[test]
    fn visits_in_fifo_order() {
        let t = run("
S..
...
..E
");
        assert_eq!(
            &t.visited()[..4],
            &[
                Point::at(0, 0),
                Point::at(1, 0),
                Point::at(0, 1),
                Point::at(2, 0),
            ]
        );
        assert!(t.reached());
        assert_eq!(t.visited().last(), Some(&Point::at(2, 2)));
        assert!(t.visited().len() <= 9);
    }

    #[test]
    fn shortest_path_on_open_grid() {
        let t = run("
S..
...
..E
");
        let path = t.path().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&Point::at(0, 0)));
        assert_eq!(path.last(), Some(&Point::at(2, 2)));
        assert_eq!(t.distance_at(Point::at(2, 2)), Some(4));
    }

    #[test]
    fn walls_are_never_visited() {
        let t = run("
S#.
.#.
..E
");
        assert!(t.visited().iter().all(|p| p.col() != 1 || p.row() == 2));
        assert_eq!(
            t.path().unwrap(),
            vec![
                Point::at(0, 0),
                Point::at(1, 0),
                Point::at(2, 0),
                Point::at(2, 1),
                Point::at(2, 2),
            ]
        );
    }

    #[test]
    fn enclosed_end_is_unreachable() {
        let t = run("
S....
..#..
.#E#.
..#..
.....
");
        assert!(!t.reached());
        assert!(!t.visited().contains(&Point::at(2, 2)));
        assert_eq!(t.path(), None);
        // Everything except the walls and the enclosed end.
        assert_eq!(t.visited().len(), 25 - 4 - 1);
    }

    #[test]
    fn start_equals_end() {
        let grid = Grid::new(3, 3);
        let p = Point::at(1, 1);
        let t = Pathfinder::for_grid(&grid).bfs(&grid, p, p).unwrap();
        assert_eq!(t.visited(), &[p]);
        assert_eq!(t.path(), Some(vec![p]));
    }

    #[test]
    fn walled_start_visits_nothing() {
        let mut grid = Grid::new(2, 2);
        grid.set(Point::at(0, 0), Cell::WALL);
        let t = Pathfinder::for_grid(&grid)
            .bfs(&grid, Point::at(0, 0), Point::at(1, 1))
            .unwrap();
        assert!(t.visited().is_empty());
        assert!(!t.reached());
    }
}
