//! Turn-alternation invariant.

use super::super::typestate::MatchInProgress;
use super::Invariant;

/// Invariant: consecutive history entries belong to opposing pieces, and
/// the player on turn is the opponent of the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<MatchInProgress> for AlternatingTurnInvariant {
    fn holds(game: &MatchInProgress) -> bool {
        let alternates = game
            .history()
            .windows(2)
            .all(|pair| pair[1].piece() == pair[0].piece().opponent());

        let turn_follows = match game.history().last() {
            Some(last) => game.to_move() == last.piece().opponent(),
            // An empty history puts no constraint on who starts.
            None => true,
        };

        alternates && turn_follows
    }

    fn description() -> &'static str {
        "moves alternate between the two pieces"
    }
}
