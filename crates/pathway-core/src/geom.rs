//! Grid coordinates: [`Point`] and the board rectangle [`Range`].
//!
//! A cell is identified by a `Point` where `x` is the column and `y` is the
//! row, so `(row, col)` maps to `Point { x: col, y: row }`.

use std::fmt;

/// A cell coordinate. X grows right (columns), Y grows down (rows).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a point from column `x` and row `y`.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create a point from a `(row, col)` pair.
    #[inline]
    pub const fn at(row: i32, col: i32) -> Self {
        Self { x: col, y: row }
    }

    #[inline]
    pub const fn row(self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn col(self) -> i32 {
        self.x
    }

    /// The four orthogonal neighbours in enumeration order: up, down,
    /// left, right. Some may lie outside any board.
    #[inline]
    pub const fn cardinal(self) -> [Point; 4] {
        let Point { x, y } = self;
        [
            Point::new(x, y - 1),
            Point::new(x, y + 1),
            Point::new(x - 1, y),
            Point::new(x + 1, y),
        ]
    }

    /// Number of orthogonal steps between `self` and `other`.
    #[inline]
    pub fn manhattan(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

// Row-major, the order cells are stored and iterated in.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

/// The `rows × cols` rectangle of a board, anchored at row 0, column 0.
///
/// Cells are numbered row-major, which is the index every per-cell arena in
/// the workspace uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RangeSize"))]
pub struct Range {
    rows: i32,
    cols: i32,
}

// Deserialized form of a `Range`, clamped through `Range::sized`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RangeSize {
    rows: i32,
    cols: i32,
}

#[cfg(feature = "serde")]
impl From<RangeSize> for Range {
    fn from(size: RangeSize) -> Self {
        Range::sized(size.rows, size.cols)
    }
}

impl Range {
    /// Rectangle of `rows × cols` cells. Negative sizes collapse to empty.
    #[inline]
    pub fn sized(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
        }
    }

    #[inline]
    pub fn rows(self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(self) -> i32 {
        self.cols
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (0..self.rows).contains(&p.row()) && (0..self.cols).contains(&p.col())
    }

    /// Row-major index of `p`, or `None` outside the rectangle.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.row() as usize * self.cols as usize + p.col() as usize)
    }

    /// Point at row-major index `idx`. `idx` must be below `len()`.
    #[inline]
    pub fn point(self, idx: usize) -> Point {
        let cols = self.cols.max(1) as usize;
        Point::at((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Every cell in row-major order.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the cells of a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.range.len() {
            return None;
        }
        let p = self.range.point(self.next);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.range.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_col_round_trip() {
        let p = Point::at(3, 7);
        assert_eq!(p, Point::new(7, 3));
        assert_eq!((p.row(), p.col()), (3, 7));
        assert_eq!(p.to_string(), "(3, 7)");
    }

    #[test]
    fn cardinal_order_is_up_down_left_right() {
        assert_eq!(
            Point::at(5, 5).cardinal(),
            [
                Point::at(4, 5),
                Point::at(6, 5),
                Point::at(5, 4),
                Point::at(5, 6),
            ]
        );
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Point::at(0, 0).manhattan(Point::at(2, 2)), 4);
        assert_eq!(Point::at(4, 1).manhattan(Point::at(1, 3)), 5);
    }

    #[test]
    fn points_sort_row_major() {
        let mut pts = vec![Point::at(1, 0), Point::at(0, 2), Point::at(0, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::at(0, 1), Point::at(0, 2), Point::at(1, 0)]);
    }

    #[test]
    fn index_and_point_are_inverse() {
        let r = Range::sized(3, 4);
        assert_eq!(r.len(), 12);
        for (i, p) in r.iter().enumerate() {
            assert_eq!(r.index(p), Some(i));
            assert_eq!(r.point(i), p);
        }
        assert_eq!(r.index(Point::at(3, 0)), None);
        assert_eq!(r.index(Point::at(0, -1)), None);
        assert_eq!(r.to_string(), "3x4");
    }

    #[test]
    fn iteration_is_row_major_and_exact() {
        let pts: Vec<Point> = Range::sized(2, 2).into_iter().collect();
        assert_eq!(
            pts,
            vec![
                Point::at(0, 0),
                Point::at(0, 1),
                Point::at(1, 0),
                Point::at(1, 1),
            ]
        );
        let mut it = Range::sized(2, 3).iter();
        assert_eq!(it.len(), 6);
        it.next();
        assert_eq!(it.len(), 5);
    }

    #[test]
    fn degenerate_sizes_are_empty() {
        for r in [Range::sized(0, 5), Range::sized(3, -1)] {
            assert!(r.is_empty());
            assert_eq!(r.iter().count(), 0);
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn range_json_round_trip() {
        let r = Range::sized(3, 4);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"rows":3,"cols":4}"#);
        assert_eq!(serde_json::from_str::<Range>(&json).unwrap(), r);
    }

    #[test]
    fn negative_sizes_deserialize_as_empty() {
        let r: Range = serde_json::from_str(r#"{"rows":-1,"cols":2}"#).unwrap();
        assert_eq!(r, Range::sized(0, 2));
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
    }
}
