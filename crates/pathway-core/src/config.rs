//! Board configuration.

use crate::cell::DEFAULT_WEIGHT;
use crate::error::BoardError;
use crate::geom::{Point, Range};

/// Weight given to a cell when it is toggled to weighted.
pub const DEFAULT_WEIGHTED_COST: u32 = 5;

/// Dimensions, default endpoints and weighted cost of a [`Board`](crate::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Point,
    pub end: Point,
    pub weighted_cost: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 40,
            cols: 50,
            start: Point::at(10, 5),
            end: Point::at(10, 45),
            weighted_cost: DEFAULT_WEIGHTED_COST,
        }
    }
}

impl BoardConfig {
    /// A `rows × cols` configuration with the given endpoints.
    pub fn new(rows: i32, cols: i32, start: Point, end: Point) -> Self {
        Self {
            rows,
            cols,
            start,
            end,
            ..Self::default()
        }
    }

    /// The range covered by the board.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.rows, self.cols)
    }

    /// Check that the board is non-empty, both endpoints lie on it and are
    /// distinct, and the weighted cost exceeds the floor cost.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(BoardError::InvalidSize {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.weighted_cost <= DEFAULT_WEIGHT {
            return Err(BoardError::InvalidWeight(self.weighted_cost));
        }
        let bounds = self.bounds();
        for p in [self.start, self.end] {
            if !bounds.contains(p) {
                return Err(BoardError::OutOfBounds(p));
            }
        }
        if self.start == self.end {
            return Err(BoardError::SameEndpoints(self.start));
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: BoardConfig = serde_json::from_str(r#"{"rows": 8, "cols": 9}"#).unwrap();
        assert_eq!(cfg.rows, 8);
        assert_eq!(cfg.cols, 9);
        assert_eq!(cfg.start, BoardConfig::default().start);
        assert_eq!(cfg.weighted_cost, DEFAULT_WEIGHTED_COST);
    }

    #[test]
    fn points_use_x_y_fields() {
        let cfg: BoardConfig = serde_json::from_str(
            r#"{"rows": 3, "cols": 3, "start": {"x": 0, "y": 2}, "end": {"x": 2, "y": 0}}"#,
        )
        .unwrap();
        assert_eq!(cfg.start, Point::at(2, 0));
        assert_eq!(cfg.end, Point::at(0, 2));
        assert_eq!(cfg.validate(), Ok(()));
    }
}
