//! Text layouts for boards.
//!
//! One line per row, all lines the same width:
//!
//! ```text
//! S..#....
//! .~.#.##.
//! ...#..E.
//! ```
//!
//! `.` floor, `#` wall, `~` weighted, `S` start, `E` end.

use crate::board::Board;
use crate::cell::{Cell, CellKind};
use crate::config::DEFAULT_WEIGHTED_COST;
use crate::error::BoardError;
use crate::geom::Point;
use crate::grid::Grid;

const FLOOR: char = '.';
const WALL: char = '#';
const WEIGHTED: char = '~';
const START: char = 'S';
const END: char = 'E';

impl Board {
    /// Parse a board from a text layout, using the default weighted cost.
    ///
    /// Leading and trailing whitespace of the whole text is trimmed, but
    /// not of individual lines.
    pub fn from_layout(s: &str) -> Result<Self, BoardError> {
        Self::from_layout_weighted(s, DEFAULT_WEIGHTED_COST)
    }

    /// Parse a board from a text layout; `~` cells cost `weighted_cost`.
    pub fn from_layout_weighted(s: &str, weighted_cost: u32) -> Result<Self, BoardError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(BoardError::EmptyLayout);
        }
        let lines: Vec<&str> = s.lines().collect();
        let width = lines[0].chars().count();
        for (line, text) in lines.iter().enumerate() {
            let found = text.chars().count();
            if found != width {
                return Err(BoardError::InconsistentWidth {
                    line,
                    expected: width,
                    found,
                });
            }
        }

        let (rows, cols) = layout_size(lines.len(), width)?;
        let mut grid = Grid::new(rows, cols);
        let mut start = None;
        let mut end = None;
        for (row, text) in (0..rows).zip(&lines) {
            for (col, ch) in (0..cols).zip(text.chars()) {
                let p = Point::at(row, col);
                let cell = match ch {
                    FLOOR => Cell::FLOOR,
                    WALL => Cell::WALL,
                    WEIGHTED => Cell::weighted(weighted_cost),
                    START => {
                        if start.replace(p).is_some() {
                            return Err(BoardError::DuplicateStart(p));
                        }
                        Cell::FLOOR
                    }
                    END => {
                        if end.replace(p).is_some() {
                            return Err(BoardError::DuplicateEnd(p));
                        }
                        Cell::FLOOR
                    }
                    ch => return Err(BoardError::InvalidChar { ch, pos: p }),
                };
                grid.set(p, cell);
            }
        }

        let start = start.ok_or(BoardError::MissingStart)?;
        let end = end.ok_or(BoardError::MissingEnd)?;
        Board::from_parts(grid, start, end, weighted_cost)
    }

    /// Render the board in the layout format accepted by
    /// [`from_layout`](Self::from_layout).
    pub fn to_layout(&self) -> String {
        let grid = self.grid();
        let mut out = String::with_capacity(grid.len() + grid.rows() as usize);
        for (p, cell) in grid.iter() {
            if p.col() == 0 && p.row() > 0 {
                out.push('\n');
            }
            let ch = if self.is_start(p) {
                START
            } else if self.is_end(p) {
                END
            } else {
                match cell.kind() {
                    CellKind::Floor => FLOOR,
                    CellKind::Wall => WALL,
                    CellKind::Weighted => WEIGHTED,
                }
            };
            out.push(ch);
        }
        out
    }
}

/// Board dimensions of a layout with `rows` lines of `cols` characters.
fn layout_size(rows: usize, cols: usize) -> Result<(i32, i32), BoardError> {
    match (i32::try_from(rows), i32::try_from(cols)) {
        (Ok(r), Ok(c)) => Ok((r, c)),
        _ => Err(BoardError::LayoutTooLarge { rows, cols }),
    }
}
