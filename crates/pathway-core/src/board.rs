//! The editable [`Board`]: a [`Grid`] plus its start and end cells.
//!
//! Front-ends mutate the board in response to user input. Pathfinding never
//! touches it; runs read a [`snapshot`](Board::snapshot) instead.

use std::fmt;

use crate::cell::{Cell, CellKind};
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::geom::Point;
use crate::grid::Grid;

/// A grid with exactly one start cell and one end cell.
///
/// Invariants: start and end are in bounds, distinct, and never walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    start: Point,
    end: Point,
    config: BoardConfig,
}

impl Board {
    /// Build an all-floor board from `config`.
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        log::debug!(
            "new board {}x{} start={} end={}",
            config.rows,
            config.cols,
            config.start,
            config.end
        );
        Ok(Self {
            grid: Grid::new(config.rows, config.cols),
            start: config.start,
            end: config.end,
            config,
        })
    }

    /// Assemble a board from parts, checking the endpoint invariants.
    pub(crate) fn from_parts(
        grid: Grid,
        start: Point,
        end: Point,
        weighted_cost: u32,
    ) -> Result<Self, BoardError> {
        let config = BoardConfig {
            rows: grid.rows(),
            cols: grid.cols(),
            start,
            end,
            weighted_cost,
        };
        config.validate()?;
        for p in [start, end] {
            if grid.at(p).is_some_and(Cell::is_wall) {
                return Err(BoardError::Blocked(p));
            }
        }
        Ok(Self {
            grid,
            start,
            end,
            config,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Entry cost given to weighted cells on this board.
    #[inline]
    pub fn weighted_cost(&self) -> u32 {
        self.config.weighted_cost
    }

    #[inline]
    pub fn is_start(&self, p: Point) -> bool {
        p == self.start
    }

    #[inline]
    pub fn is_end(&self, p: Point) -> bool {
        p == self.end
    }

    #[inline]
    fn is_endpoint(&self, p: Point) -> bool {
        self.is_start(p) || self.is_end(p)
    }

    /// Cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.grid.at(p)
    }

    /// Flip `p` between wall and floor. A weighted cell becomes a wall and
    /// loses its weight. Returns whether the board changed; endpoints and
    /// out-of-bounds points are left alone.
    pub fn toggle_wall(&mut self, p: Point) -> bool {
        if self.is_endpoint(p) {
            log::trace!("toggle_wall ignored on endpoint {p}");
            return false;
        }
        let Some(cell) = self.grid.at(p) else {
            return false;
        };
        let next = if cell.is_wall() { Cell::FLOOR } else { Cell::WALL };
        self.grid.set(p, next)
    }

    /// Cycle `p` through the weight states: floor becomes weighted, weighted
    /// becomes floor, and a wall is cleared to floor. Returns whether the
    /// board changed; endpoints and out-of-bounds points are left alone.
    pub fn toggle_weight(&mut self, p: Point) -> bool {
        if self.is_endpoint(p) {
            log::trace!("toggle_weight ignored on endpoint {p}");
            return false;
        }
        let Some(cell) = self.grid.at(p) else {
            return false;
        };
        let next = match cell.kind() {
            CellKind::Floor => Cell::weighted(self.config.weighted_cost),
            CellKind::Weighted | CellKind::Wall => Cell::FLOOR,
        };
        self.grid.set(p, next)
    }

    /// Relocate the start cell to `p`.
    pub fn move_start(&mut self, p: Point) -> Result<(), BoardError> {
        self.check_endpoint_target(p, self.end)?;
        self.start = p;
        Ok(())
    }

    /// Relocate the end cell to `p`.
    pub fn move_end(&mut self, p: Point) -> Result<(), BoardError> {
        self.check_endpoint_target(p, self.start)?;
        self.end = p;
        Ok(())
    }

    fn check_endpoint_target(&self, p: Point, other: Point) -> Result<(), BoardError> {
        let cell = self.grid.at(p).ok_or(BoardError::OutOfBounds(p))?;
        if p == other {
            log::trace!("endpoint move onto {p} rejected: occupied");
            return Err(BoardError::Occupied(p));
        }
        if cell.is_wall() {
            log::trace!("endpoint move onto {p} rejected: wall");
            return Err(BoardError::Blocked(p));
        }
        Ok(())
    }

    /// Turn every wall and weighted cell back into floor. Endpoints stay
    /// where they are.
    pub fn clear_obstacles(&mut self) {
        self.grid.fill(Cell::FLOOR);
    }

    /// Rebuild the board from its configuration: all floor, endpoints back
    /// at their configured positions.
    pub fn reset(&mut self) {
        log::debug!("reset board to {}", self.grid.bounds());
        self.grid = Grid::new(self.config.rows, self.config.cols);
        self.start = self.config.start;
        self.end = self.config.end;
    }

    /// An owned copy of the board, safe to hand to a pathfinding run.
    pub fn snapshot(&self) -> Board {
        self.clone()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_layout())
    }
}
