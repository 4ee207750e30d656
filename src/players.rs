//! Move sources: the input-collaborator seam.
//!
//! The engine never collects input itself. A [`MoveSource`] supplies one
//! coordinate per turn and hears back about rejections; console prompts,
//! GUIs, or network peers all sit behind this trait, outside the crate.

use crate::game::{Coord, MatchInProgress, Move, MoveError};
use std::collections::VecDeque;
use tracing::debug;

/// Supplies coordinates for the player on turn.
///
/// Synchronous by design: the engine serves one match at a time and calls
/// back only between moves, never mid-application.
pub trait MoveSource {
    /// Chooses a coordinate for the current player.
    fn choose(&mut self, game: &MatchInProgress) -> Coord;

    /// Called when a chosen move was rejected; the same player will be
    /// asked again.
    fn notify_rejected(&mut self, action: &Move, error: &MoveError) {
        let _ = (action, error);
    }
}

/// Replays a fixed list of coordinates.
///
/// Deterministic double for tests and move-log replays. Rejections are
/// recorded and can be inspected afterwards.
///
/// # Panics
///
/// Panics when the script runs dry, so a script must cover the match it
/// drives (rejected entries included).
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    moves: VecDeque<Coord>,
    rejected: Vec<(Move, MoveError)>,
}

impl ScriptedSource {
    /// Creates a source that yields the given coordinates in order.
    pub fn new(moves: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            rejected: Vec::new(),
        }
    }

    /// Moves the source saw rejected, in order.
    pub fn rejected(&self) -> &[(Move, MoveError)] {
        &self.rejected
    }

    /// Coordinates not yet consumed.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedSource {
    fn choose(&mut self, _game: &MatchInProgress) -> Coord {
        self.moves
            .pop_front()
            .expect("scripted source ran out of moves")
    }

    fn notify_rejected(&mut self, action: &Move, error: &MoveError) {
        debug!(%action, %error, "scripted move rejected");
        self.rejected.push((*action, error.clone()));
    }
}

/// Picks the first vacant cell in row-major order.
///
/// Fills boards deterministically without any I/O; useful for exercising
/// whole matches. Pure enumeration, no move evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstVacant;

impl MoveSource for FirstVacant {
    fn choose(&mut self, game: &MatchInProgress) -> Coord {
        let coord = game
            .board()
            .vacancies()
            .next()
            .expect("an in-progress match always has a vacant cell");
        debug!(piece = %game.to_move(), %coord, "picked first vacancy");
        coord
    }
}
