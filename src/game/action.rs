//! First-class move events.
//!
//! Moves are domain events, not side effects: they carry the player's
//! intent, validate independently of execution, and serialize for logging
//! and replay.

use super::coord::Coord;
use super::types::Piece;
use serde::{Deserialize, Serialize};

/// A move: a piece placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The piece being placed.
    pub piece: Piece,
    /// Where it is placed.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(piece: Piece, coord: Coord) -> Self {
        Self { piece, coord }
    }

    /// Returns the piece this move places.
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Returns the target coordinate.
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.piece, self.coord)
    }
}

/// Error raised when validating a move.
///
/// Every variant is locally recoverable: the controller reports it and the
/// input collaborator re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate lies outside the board.
    #[display("coordinate {} is outside the board", _0)]
    OutOfBounds(Coord),

    /// The target cell already holds a piece.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// The piece does not belong to the player on turn.
    #[display("it is not {}'s turn", _0)]
    WrongPlayer(Piece),

    /// A postcondition invariant failed after a transition.
    #[display("invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
