//! The connect-k engine: board, rules, and match controller.

mod action;
mod board;
mod contracts;
mod coord;
mod invariants;
mod rules;
mod typestate;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, BoardError};
pub use contracts::{CellVacant, Contract, InBounds, LegalMove, MoveContract, PlayersTurn};
pub use coord::Coord;
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation, MatchInvariants,
    MonotonicBoardInvariant, OccupancyInvariant,
};
pub use typestate::{
    run_match, MatchFinished, MatchInProgress, MatchResult, MatchSetup, RejectedMove,
};
pub use types::{Cell, Outcome, Piece, WinKind, WinLength};
