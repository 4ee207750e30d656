//! Occupancy invariant: moves played and cells occupied agree.

use super::super::typestate::MatchInProgress;
use super::super::types::Cell;
use super::Invariant;

/// Invariant: the history length, the board's occupancy counter, and the
/// count of non-empty cells are all equal.
pub struct OccupancyInvariant;

impl Invariant<MatchInProgress> for OccupancyInvariant {
    fn holds(game: &MatchInProgress) -> bool {
        let filled = game
            .board()
            .cells()
            .iter()
            .filter(|cell| **cell != Cell::Empty)
            .count();

        filled == game.history().len() && filled == game.board().occupied()
    }

    fn description() -> &'static str {
        "occupied-cell count equals the number of moves played"
    }
}
