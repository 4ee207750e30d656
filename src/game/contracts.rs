//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning about transitions:
//! {P(state, action)} action {Q(before, after)}. The precondition gates
//! every board mutation — the controller never applies a move the
//! [`LegalMove`] contract has not accepted — and the postcondition verifies
//! the invariant set after a transition.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, MatchInvariants};
use super::typestate::MatchInProgress;
use super::types::Cell;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the target coordinate lies on the board.
pub struct InBounds;

impl InBounds {
    /// Checks the bound in each axis.
    #[instrument(skip(game))]
    pub fn check(action: &Move, game: &MatchInProgress) -> Result<(), MoveError> {
        if game.board().contains(action.coord()) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds(action.coord()))
        }
    }
}

/// Precondition: the target cell is vacant.
pub struct CellVacant;

impl CellVacant {
    /// Checks that nothing has been placed at the coordinate.
    #[instrument(skip(game))]
    pub fn check(action: &Move, game: &MatchInProgress) -> Result<(), MoveError> {
        match game.board().cell(action.coord()) {
            Some(Cell::Empty) => Ok(()),
            Some(Cell::Occupied(_)) => Err(MoveError::CellOccupied(action.coord())),
            None => Err(MoveError::OutOfBounds(action.coord())),
        }
    }
}

/// Precondition: the acting piece is on turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks the move against the alternation state.
    #[instrument(skip(game))]
    pub fn check(action: &Move, game: &MatchInProgress) -> Result<(), MoveError> {
        if action.piece() == game.to_move() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer(action.piece()))
        }
    }
}

/// Composite precondition: a move is legal when it is in bounds, the cell
/// is vacant, and the acting piece is on turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(action: &Move, game: &MatchInProgress) -> Result<(), MoveError> {
        InBounds::check(action, game)?;
        CellVacant::check(action, game)?;
        PlayersTurn::check(action, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for playing a move.
///
/// Precondition: [`LegalMove`]. Postcondition: the full match invariant set
/// still holds for the successor state.
pub struct MoveContract;

impl Contract<MatchInProgress, Move> for MoveContract {
    fn pre(game: &MatchInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &MatchInProgress, after: &MatchInProgress) -> Result<(), MoveError> {
        MatchInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|violation| violation.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })
    }
}
