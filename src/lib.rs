//! Generalized N-by-N connect-K game engine.
//!
//! Two players alternate placing immutable pieces on a square grid; the
//! first to align K pieces in a row, column, or diagonal wins, where K is
//! derived from the board size (3 below size 5, 4 below size 9, else 5).
//! Win detection scans only the neighborhood of the just-placed piece, so
//! each move costs O(K) rather than O(N²).
//!
//! # Architecture
//!
//! - **Board**: grid ownership, move legality and application, the
//!   localized win scan, fullness.
//! - **Match controller**: typestate lifecycle ([`MatchSetup`] →
//!   [`MatchInProgress`] → [`MatchFinished`]) with contract-gated moves
//!   and invariant checking.
//! - **Move sources**: the seam where input collaborators (console, GUI,
//!   network) plug in; the engine itself never blocks on input.
//! - **Session**: player identities and win tallies across matches.
//!
//! # Example
//!
//! ```
//! use connect_k::{FirstVacant, Session};
//!
//! # fn main() -> Result<(), connect_k::BoardError> {
//! let mut session = Session::new("Ada", "Grace");
//! let report = session.play_match(3, &mut FirstVacant)?;
//!
//! // Filling row-major, X completes the (2,0)-(1,1)-(0,2) diagonal first.
//! assert_eq!(report.winner(), Some("Ada"));
//! assert_eq!(session.player_x().wins(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod players;
mod session;

// Crate-level exports - engine types
pub use game::{
    run_match, AlternatingTurnInvariant, Board, BoardError, Cell, CellVacant, Contract, Coord,
    InBounds, Invariant, InvariantSet, InvariantViolation, LegalMove, MatchFinished,
    MatchInProgress, MatchInvariants, MatchResult, MatchSetup, MonotonicBoardInvariant, Move,
    MoveContract, MoveError, OccupancyInvariant, Outcome, Piece, PlayersTurn, RejectedMove,
    WinKind, WinLength,
};

// Crate-level exports - input collaborators
pub use players::{FirstVacant, MoveSource, ScriptedSource};

// Crate-level exports - session management
pub use session::{MatchReport, Player, Session};
