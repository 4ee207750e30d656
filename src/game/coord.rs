//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A 0-based (row, column) board coordinate.
///
/// Coordinates are plain positions; whether one lies on a particular board
/// is the board's question, answered by
/// [`Board::contains`](super::Board::contains). One-based numbering for
/// display belongs to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offsets by signed deltas, or `None` when either component would go
    /// negative. Upper bounds are the board's to check.
    pub(crate) fn offset(self, delta_row: isize, delta_col: isize) -> Option<Coord> {
        let row = self.row.checked_add_signed(delta_row)?;
        let col = self.col.checked_add_signed(delta_col)?;
        Some(Coord { row, col })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_within_range() {
        assert_eq!(Coord::new(2, 2).offset(-1, 1), Some(Coord::new(1, 3)));
        assert_eq!(Coord::new(2, 2).offset(0, 0), Some(Coord::new(2, 2)));
    }

    #[test]
    fn test_offset_below_zero() {
        assert_eq!(Coord::new(0, 3).offset(-1, 0), None);
        assert_eq!(Coord::new(3, 0).offset(0, -1), None);
    }
}
