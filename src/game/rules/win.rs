//! Localized win detection.
//!
//! Instead of rescanning the whole board after every move, the scan covers
//! only the neighborhood of the just-placed piece: offsets `-(K-1)..=K-1`
//! along the row, the column, and both diagonals, with one run counter per
//! lane. Per-move cost is proportional to the win length K, not the board
//! area.

use super::super::board::Board;
use super::super::coord::Coord;
use super::super::types::{Cell, Piece, WinKind};
use tracing::instrument;

/// Scan lanes: unit step per offset and the win kind the lane reports.
const LANES: [(isize, isize, WinKind); 4] = [
    (0, 1, WinKind::Row),
    (1, 0, WinKind::Column),
    (1, 1, WinKind::Diagonal),
    (1, -1, WinKind::Diagonal),
];

/// Checks whether placing `piece` at `origin` completed a winning line.
///
/// Any K-long line through `origin` has every cell within `K - 1` steps of
/// `origin` along its lane, so scanning that window in each lane finds every
/// win this placement could have created. Each lane keeps a running count of
/// consecutive `piece` cells; a cell that is out of bounds or holds anything
/// else resets the count. The first count to reach K reports its kind and
/// the scan stops. Out-of-bounds offsets sit at the ends of a lane's window,
/// so a reset there can never split an unbroken run.
#[instrument(skip(board))]
pub fn scan(board: &Board, origin: Coord, piece: Piece) -> Option<WinKind> {
    let target = board.win_length().get();
    let reach = target as isize - 1;
    let mut runs = [0usize; LANES.len()];

    for step in -reach..=reach {
        for (lane, &(delta_row, delta_col, kind)) in LANES.iter().enumerate() {
            let held = origin
                .offset(step * delta_row, step * delta_col)
                .and_then(|coord| board.cell(coord))
                == Some(Cell::Occupied(piece));
            runs[lane] = if held { runs[lane] + 1 } else { 0 };
            if runs[lane] == target {
                return Some(kind);
            }
        }
    }

    None
}
