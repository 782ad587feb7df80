use thiserror::Error;

use crate::geom::Point;

/// Errors raised while building, parsing or editing a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board must have at least one row and one column, got {rows}x{cols}")]
    InvalidSize { rows: i32, cols: i32 },

    #[error("weighted cost must be greater than 1, got {0}")]
    InvalidWeight(u32),

    #[error("{0} is outside the board")]
    OutOfBounds(Point),

    #[error("{0} is a wall")]
    Blocked(Point),

    #[error("{0} is already occupied by the other endpoint")]
    Occupied(Point),

    #[error("start and end must be different cells, both at {0}")]
    SameEndpoints(Point),

    #[error("layout is empty")]
    EmptyLayout,

    #[error("layout of {rows} lines by {cols} columns is too large")]
    LayoutTooLarge { rows: usize, cols: usize },

    #[error("layout line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },

    #[error("layout has no start cell `S`")]
    MissingStart,

    #[error("layout has no end cell `E`")]
    MissingEnd,

    #[error("layout has a second start cell at {0}")]
    DuplicateStart(Point),

    #[error("layout has a second end cell at {0}")]
    DuplicateEnd(Point),
}
