//! Monotonic board invariant: occupied cells never change.

use super::super::typestate::MatchInProgress;
use super::Invariant;

/// Invariant: the board is exactly the history applied to an empty grid,
/// and no move in the history landed on an occupied cell.
///
/// Once a cell transitions from vacant to occupied it never changes again;
/// verified by replaying the history and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<MatchInProgress> for MonotonicBoardInvariant {
    fn holds(game: &MatchInProgress) -> bool {
        let mut reconstructed = game.board().cleared();

        for action in game.history() {
            if !reconstructed.is_legal(action.coord()) {
                return false;
            }
            reconstructed.apply_move(action.coord(), action.piece());
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "occupied cells are never overwritten and match the move history"
    }
}
