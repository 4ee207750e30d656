//! First-class invariants for the match state.
//!
//! Invariants are logical properties that must hold after every transition.
//! Each is testable on its own; the composed set backs the move contract's
//! postcondition.

mod alternating_turn;
mod monotonic_board;
mod occupancy;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use occupancy::OccupancyInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks whether the invariant holds.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new violation record.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples so related invariants compose into one
/// verification step.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn record<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        record::<S, I1>(state, &mut violations);
        record::<S, I2>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        record::<S, I1>(state, &mut violations);
        record::<S, I2>(state, &mut violations);
        record::<S, I3>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All match invariants as a composable set.
pub type MatchInvariants = (
    MonotonicBoardInvariant,
    OccupancyInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::super::action::Move;
    use super::super::coord::Coord;
    use super::super::typestate::{MatchInProgress, MatchResult, MatchSetup};
    use super::super::types::Piece;
    use super::*;

    fn played(moves: &[(usize, usize)]) -> MatchInProgress {
        let setup = MatchSetup::new(3).expect("valid size");
        let mut piece = Piece::X;
        let actions: Vec<Move> = moves
            .iter()
            .map(|&(row, col)| {
                let action = Move::new(piece, Coord::new(row, col));
                piece = piece.opponent();
                action
            })
            .collect();
        match MatchInProgress::replay(setup, Piece::X, &actions) {
            Ok(MatchResult::InProgress(game)) => game,
            other => panic!("expected an in-progress match: {other:?}"),
        }
    }

    #[test]
    fn test_set_holds_for_fresh_match() {
        let game = MatchSetup::new(3).unwrap().start(Piece::X);
        assert!(MatchInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_set_holds_after_moves() {
        let game = played(&[(0, 0), (1, 1), (0, 1)]);
        assert!(MatchInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_set_collects_violations() {
        let mut game = played(&[(1, 1)]);
        // Place behind the history's back.
        game.board.apply_move(Coord::new(0, 0), Piece::O);

        let violations = MatchInvariants::check_all(&game).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_pair_composes() {
        let game = played(&[(0, 0), (2, 2)]);
        type Pair = (MonotonicBoardInvariant, OccupancyInvariant);
        assert!(Pair::check_all(&game).is_ok());
    }
}
