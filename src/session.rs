//! Session layer: players, scoring, and match lifecycle.
//!
//! A session owns the two player identities for its whole lifetime and
//! tallies results across matches. Scoring lives here, not in the match
//! controller, which stays free of scoring policy.

use crate::game::{run_match, BoardError, MatchFinished, MatchSetup, Outcome, Piece, WinLength};
use crate::players::MoveSource;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A session participant: identity, assigned piece, cumulative wins.
///
/// Created once per session and mutated only when a match ends in a win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    piece: Piece,
    wins: u32,
}

impl Player {
    /// Creates a player with no recorded wins.
    pub fn new(name: impl Into<String>, piece: Piece) -> Self {
        Self {
            name: name.into(),
            piece,
            wins: 0,
        }
    }

    /// The player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The piece this player's moves are marked with.
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Matches won so far in this session.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    fn record_win(&mut self) {
        self.wins += 1;
    }
}

/// Report of one completed match, for presentation collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    outcome: Outcome,
    winner: Option<String>,
    moves: usize,
}

impl MatchReport {
    /// How the match ended.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Name of the winner, if there was one.
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Number of moves applied before the terminal state.
    pub fn moves(&self) -> usize {
        self.moves
    }
}

/// A two-player session.
///
/// X always moves first in each match; win counts accumulate until the
/// session is dropped.
#[derive(Debug, Clone)]
pub struct Session {
    player_x: Player,
    player_o: Player,
    draws: u32,
}

impl Session {
    /// Creates a session with both players.
    #[instrument]
    pub fn new(x_name: &str, o_name: &str) -> Self {
        info!(x = x_name, o = o_name, "Creating session");
        Self {
            player_x: Player::new(x_name, Piece::X),
            player_o: Player::new(o_name, Piece::O),
            draws: 0,
        }
    }

    /// The player marking X.
    pub fn player_x(&self) -> &Player {
        &self.player_x
    }

    /// The player marking O.
    pub fn player_o(&self) -> &Player {
        &self.player_o
    }

    /// The player assigned the given piece.
    pub fn player_for(&self, piece: Piece) -> &Player {
        match piece {
            Piece::X => &self.player_x,
            Piece::O => &self.player_o,
        }
    }

    /// Matches that ended with a full board and no winner.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Runs one match on a fresh board of the given size, sourcing moves
    /// from `source`, and applies the result to the standings.
    #[instrument(skip(self, source))]
    pub fn play_match<S: MoveSource>(
        &mut self,
        size: usize,
        source: &mut S,
    ) -> Result<MatchReport, BoardError> {
        let setup = MatchSetup::new(size)?;
        Ok(self.run(setup, source))
    }

    /// Same as [`Session::play_match`] with an explicit win-length policy.
    #[instrument(skip(self, source))]
    pub fn play_match_with<S: MoveSource>(
        &mut self,
        size: usize,
        win_length: WinLength,
        source: &mut S,
    ) -> Result<MatchReport, BoardError> {
        let setup = MatchSetup::with_win_length(size, win_length)?;
        Ok(self.run(setup, source))
    }

    fn run<S: MoveSource>(&mut self, setup: MatchSetup, source: &mut S) -> MatchReport {
        let game = setup.start(Piece::X);
        let finished = run_match(game, source);
        self.record(&finished)
    }

    /// Applies scoring policy to a finished match.
    fn record(&mut self, finished: &MatchFinished) -> MatchReport {
        let moves = finished.history().len();
        match finished.outcome() {
            Outcome::Winner { piece, kind } => {
                let player = match piece {
                    Piece::X => &mut self.player_x,
                    Piece::O => &mut self.player_o,
                };
                player.record_win();
                info!(
                    winner = player.name(),
                    %kind,
                    moves,
                    wins = player.wins(),
                    "Match won"
                );
                MatchReport {
                    outcome: finished.outcome(),
                    winner: Some(player.name().to_string()),
                    moves,
                }
            }
            Outcome::Draw => {
                self.draws += 1;
                info!(moves, draws = self.draws, "Match drawn");
                MatchReport {
                    outcome: Outcome::Draw,
                    winner: None,
                    moves,
                }
            }
        }
    }
}
