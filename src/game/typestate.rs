//! Typestate match controller.
//!
//! Each phase of a match is its own type: a finished match ALWAYS has an
//! outcome, and a finished match accepts no further moves — both enforced
//! at compile time rather than by runtime status checks.

use super::action::{Move, MoveError};
use super::board::{Board, BoardError};
use super::contracts::{Contract, MoveContract};
use super::coord::Coord;
use super::types::{Outcome, Piece, WinLength};
use crate::players::MoveSource;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Match configured but not started.
///
/// Holds the board with its size and win-length policy fixed; no history,
/// no outcome, nobody on turn yet.
#[derive(Debug, Clone)]
pub struct MatchSetup {
    board: Board,
}

impl MatchSetup {
    /// Creates a setup with the win length derived from the board size.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
        })
    }

    /// Creates a setup with an explicit win-length policy.
    #[instrument]
    pub fn with_win_length(size: usize, win_length: WinLength) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::with_win_length(size, win_length)?,
        })
    }

    /// Returns the (still empty) board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the match with the given first player.
    ///
    /// Which piece goes first is the caller's policy; the session layer
    /// always passes [`Piece::X`].
    #[instrument(skip(self))]
    pub fn start(self, first: Piece) -> MatchInProgress {
        MatchInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: first,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Match accepting moves.
#[derive(Debug, Clone)]
pub struct MatchInProgress {
    pub(super) board: Board,
    pub(super) history: Vec<Move>,
    pub(super) to_move: Piece,
}

/// Result of playing a move: the next phase.
#[derive(Debug)]
pub enum MatchResult {
    /// Match continues with the other player on turn.
    InProgress(MatchInProgress),
    /// Match reached a terminal state.
    Finished(MatchFinished),
}

/// A move the controller refused, with the match state handed back intact.
///
/// `play` consumes the in-progress state, so a rejection returns it inside
/// the error instead of dropping it; the caller re-prompts and tries again
/// with the same position unchanged.
#[derive(Debug)]
pub struct RejectedMove {
    game: MatchInProgress,
    error: MoveError,
}

impl RejectedMove {
    /// The reason the move was refused.
    pub fn error(&self) -> &MoveError {
        &self.error
    }

    /// Recovers the untouched match state.
    pub fn into_game(self) -> MatchInProgress {
        self.game
    }

    /// Splits into the match state and the error.
    pub fn into_parts(self) -> (MatchInProgress, MoveError) {
        (self.game, self.error)
    }
}

impl std::fmt::Display for RejectedMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "move rejected: {}", self.error)
    }
}

impl std::error::Error for RejectedMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl MatchInProgress {
    /// Plays a move, consuming the state and returning the next phase.
    ///
    /// The move is gated by the [`LegalMove`](super::LegalMove) contract
    /// (bounds, vacancy, turn order); a rejected move hands the unchanged
    /// state back inside [`RejectedMove`]. After an accepted move the board
    /// is asked for a win through the placed coordinate, then for fullness;
    /// otherwise the turn alternates. Postcondition invariants are verified
    /// in debug builds.
    #[instrument(skip(self), fields(piece = %action.piece(), coord = %action.coord()))]
    pub fn play(self, action: Move) -> Result<MatchResult, RejectedMove> {
        if let Err(error) = MoveContract::pre(&self, &action) {
            return Err(RejectedMove { game: self, error });
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.board.apply_move(action.coord(), action.piece());
        game.history.push(action);

        if let Some(kind) = game.board.check_win(action.coord(), action.piece()) {
            return Ok(MatchResult::Finished(MatchFinished {
                board: game.board,
                history: game.history,
                outcome: Outcome::Winner {
                    piece: action.piece(),
                    kind,
                },
            }));
        }

        if game.board.is_full() {
            return Ok(MatchResult::Finished(MatchFinished {
                board: game.board,
                history: game.history,
                outcome: Outcome::Draw,
            }));
        }

        game.to_move = game.to_move.opponent();

        #[cfg(debug_assertions)]
        if let Err(error) = MoveContract::post(&before, &game) {
            return Err(RejectedMove { game, error });
        }

        Ok(MatchResult::InProgress(game))
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Piece {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Coordinates the current player may legally choose.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Coord> {
        self.board.vacancies().collect()
    }

    /// Replays a move list from the given setup.
    ///
    /// Stops at the first terminal state; trailing moves are ignored, as the
    /// original log cannot contain any.
    #[instrument(skip(setup, moves), fields(count = moves.len()))]
    pub fn replay(
        setup: MatchSetup,
        first: Piece,
        moves: &[Move],
    ) -> Result<MatchResult, MoveError> {
        let mut game = setup.start(first);

        for action in moves {
            match game.play(*action) {
                Ok(MatchResult::InProgress(next)) => game = next,
                Ok(MatchResult::Finished(done)) => return Ok(MatchResult::Finished(done)),
                Err(rejected) => return Err(rejected.into_parts().1),
            }
        }

        Ok(MatchResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Match finished — the outcome is always present, never `Option`.
#[derive(Debug, Clone)]
pub struct MatchFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl MatchFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the final board, for display.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns a fresh setup with the same size and win-length policy.
    #[instrument(skip(self))]
    pub fn restart(self) -> MatchSetup {
        MatchSetup {
            board: self.board.cleared(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Match Loop
// ─────────────────────────────────────────────────────────────

/// Drives a match to completion, sourcing coordinates from `source`.
///
/// A rejected move is reported back through
/// [`MoveSource::notify_rejected`] and the same player is asked again; the
/// loop ends only at a terminal state.
#[instrument(skip(game, source), fields(size = game.board().size()))]
pub fn run_match<S: MoveSource + ?Sized>(mut game: MatchInProgress, source: &mut S) -> MatchFinished {
    loop {
        let coord = source.choose(&game);
        let action = Move::new(game.to_move(), coord);

        match game.play(action) {
            Ok(MatchResult::InProgress(next)) => game = next,
            Ok(MatchResult::Finished(done)) => return done,
            Err(rejected) => {
                let (returned, error) = rejected.into_parts();
                source.notify_rejected(&action, &error);
                game = returned;
            }
        }
    }
}
