//! Core domain types for the connect-k engine.

use serde::{Deserialize, Serialize};

/// Piece identity a player's moves are marked with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Piece {
    /// The X piece.
    X,
    /// The O piece.
    O,
}

impl Piece {
    /// Returns the opposing piece.
    pub fn opponent(self) -> Self {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Vacant cell.
    Empty,
    /// Cell holding a placed piece.
    Occupied(Piece),
}

/// Alignment that produced a win.
///
/// Both diagonal directions report [`WinKind::Diagonal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum WinKind {
    /// K aligned pieces in a row.
    Row,
    /// K aligned pieces in a column.
    Column,
    /// K aligned pieces on a diagonal.
    Diagonal,
}

/// Outcome of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a winning line.
    Winner {
        /// The winning piece.
        piece: Piece,
        /// The alignment that won.
        kind: WinKind,
    },
    /// The board filled with no winning line.
    Draw,
}

impl Outcome {
    /// Returns the winning piece if there is one.
    pub fn winner(&self) -> Option<Piece> {
        match self {
            Outcome::Winner { piece, .. } => Some(*piece),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the match was drawn.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { piece, kind } => write!(f, "{piece} wins by {kind}"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Number of same-piece cells that must be contiguously aligned to win.
///
/// Derived from board size by default, but a policy rather than a physical
/// constraint: [`Board::with_win_length`](super::Board::with_win_length)
/// accepts any explicit value that fits the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WinLength(usize);

impl WinLength {
    /// Default policy: 3 below size 5, 4 below size 9, 5 from size 9 up.
    pub fn for_size(size: usize) -> Self {
        if size < 5 {
            Self(3)
        } else if size < 9 {
            Self(4)
        } else {
            Self(5)
        }
    }

    /// An explicit win length.
    pub fn new(length: usize) -> Self {
        Self(length)
    }

    /// The required run length.
    pub fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for WinLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
