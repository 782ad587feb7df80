//! The [`Cell`] type — terrain and entry cost of a single grid position.

#[cfg(feature = "serde")]
use crate::error::BoardError;

/// Entry cost of an ordinary floor cell.
pub const DEFAULT_WEIGHT: u32 = 1;

/// What occupies a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellKind {
    #[default]
    Floor,
    /// Impassable.
    Wall,
    /// Passable, with an entry cost above [`DEFAULT_WEIGHT`].
    Weighted,
}

/// A grid cell.
///
/// Wall and weight are exclusive: only [`CellKind::Weighted`] cells carry a
/// weight other than [`DEFAULT_WEIGHT`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CellRepr"))]
pub struct Cell {
    kind: CellKind,
    weight: u32,
}

// Deserialized form of a `Cell`, rebuilt through the constructors so a
// weightless weighted cell or a weighted wall is rejected.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CellRepr {
    kind: CellKind,
    #[serde(default = "default_weight")]
    weight: u32,
}

#[cfg(feature = "serde")]
fn default_weight() -> u32 {
    DEFAULT_WEIGHT
}

#[cfg(feature = "serde")]
impl TryFrom<CellRepr> for Cell {
    type Error = BoardError;

    fn try_from(repr: CellRepr) -> Result<Self, BoardError> {
        match (repr.kind, repr.weight) {
            (CellKind::Floor, DEFAULT_WEIGHT) => Ok(Cell::FLOOR),
            (CellKind::Wall, DEFAULT_WEIGHT) => Ok(Cell::WALL),
            (CellKind::Weighted, w) if w > DEFAULT_WEIGHT => Ok(Cell::weighted(w)),
            (_, w) => Err(BoardError::InvalidWeight(w)),
        }
    }
}

impl Cell {
    /// An ordinary floor cell.
    pub const FLOOR: Self = Self {
        kind: CellKind::Floor,
        weight: DEFAULT_WEIGHT,
    };

    /// A wall.
    pub const WALL: Self = Self {
        kind: CellKind::Wall,
        weight: DEFAULT_WEIGHT,
    };

    /// A weighted cell costing `weight` to enter. A weight of
    /// [`DEFAULT_WEIGHT`] or less yields a plain floor cell.
    #[inline]
    pub const fn weighted(weight: u32) -> Self {
        if weight <= DEFAULT_WEIGHT {
            return Self::FLOOR;
        }
        Self {
            kind: CellKind::Weighted,
            weight,
        }
    }

    #[inline]
    pub const fn kind(self) -> CellKind {
        self.kind
    }

    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self.kind, CellKind::Wall)
    }

    #[inline]
    pub const fn is_weighted(self) -> bool {
        matches!(self.kind, CellKind::Weighted)
    }

    /// Cost of stepping into this cell. Meaningless for walls.
    #[inline]
    pub const fn weight(self) -> u32 {
        self.weight
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::FLOOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_below_default_is_floor() {
        assert_eq!(Cell::weighted(1), Cell::FLOOR);
        assert_eq!(Cell::weighted(0), Cell::FLOOR);
        let c = Cell::weighted(5);
        assert!(c.is_weighted());
        assert!(!c.is_wall());
        assert_eq!(c.weight(), 5);
    }

    #[test]
    fn wall_has_no_extra_weight() {
        assert!(Cell::WALL.is_wall());
        assert_eq!(Cell::WALL.weight(), DEFAULT_WEIGHT);
        assert_eq!(Cell::default().kind(), CellKind::Floor);
    }
}
