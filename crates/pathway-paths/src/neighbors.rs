use pathway_core::Point;

/// Cached neighbor computation helper.
///
/// Enumerates the orthogonal neighbors of a grid point in a fixed order
/// (up, down, left, right), filtered by a predicate. The order decides
/// tie-breaking and animation order in every search.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the 4-directional neighbors of `p`, keeping only those for
    /// which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.cardinal() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathway_core::Range;

    #[test]
    fn corner_keeps_in_bounds_only() {
        let rng = Range::sized(3, 3);
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Point::at(0, 0), |n| rng.contains(n)).to_vec();
        assert_eq!(got, vec![Point::at(1, 0), Point::at(0, 1)]);
    }

    #[test]
    fn interior_order() {
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Point::at(1, 1), |_| true).to_vec();
        assert_eq!(
            got,
            vec![
                Point::at(0, 1),
                Point::at(2, 1),
                Point::at(1, 0),
                Point::at(1, 2),
            ]
        );
    }

    #[test]
    fn buffer_is_cleared_between_calls() {
        let mut nb = Neighbors::new();
        assert_eq!(nb.cardinal(Point::at(1, 1), |_| true).len(), 4);
        assert!(nb.cardinal(Point::at(1, 1), |_| false).is_empty());
    }
}
