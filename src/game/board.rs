//! Board state: grid ownership, move legality and application, occupancy.

use super::coord::Coord;
use super::rules;
use super::types::{Cell, Piece, WinKind, WinLength};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Error raised when constructing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The requested size is below the playable minimum.
    #[display("board size {} is below the minimum of 3", _0)]
    SizeTooSmall(usize),

    /// The requested win length cannot fit on the board.
    #[display("win length {} does not fit on a board of size {}", win_length, size)]
    WinLengthUnsatisfiable {
        /// The rejected win length.
        win_length: usize,
        /// The board size it was paired with.
        size: usize,
    },
}

impl std::error::Error for BoardError {}

/// N×N grid with occupancy tracking and localized win detection.
///
/// The board exclusively owns its cells: occupied cells are immutable for
/// the rest of the match and every mutation goes through [`Board::apply_move`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    win_length: WinLength,
    /// Cells in row-major order, `size * size` of them.
    cells: Vec<Cell>,
    /// Count of non-empty cells; grows by one per applied move.
    occupied: usize,
}

impl Board {
    /// Smallest playable board.
    pub const MIN_SIZE: usize = 3;

    /// Creates an empty board, deriving the win length from the size.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Self::with_win_length(size, WinLength::for_size(size))
    }

    /// Creates an empty board with an explicit win-length policy.
    #[instrument]
    pub fn with_win_length(size: usize, win_length: WinLength) -> Result<Self, BoardError> {
        if size < Self::MIN_SIZE {
            return Err(BoardError::SizeTooSmall(size));
        }
        if win_length.get() > size || win_length.get() < Self::MIN_SIZE {
            return Err(BoardError::WinLengthUnsatisfiable {
                win_length: win_length.get(),
                size,
            });
        }
        Ok(Self {
            size,
            win_length,
            cells: vec![Cell::Empty; size * size],
            occupied: 0,
        })
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Run length required to win on this board.
    pub fn win_length(&self) -> WinLength {
        self.win_length
    }

    /// True when the coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Cell at the coordinate, or `None` when out of bounds.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.contains(coord).then(|| self.cells[self.index(coord)])
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }

    /// True when the coordinate is on the board and the cell is vacant.
    ///
    /// Pure query: repeated calls without an intervening [`Board::apply_move`]
    /// agree.
    #[instrument(skip(self))]
    pub fn is_legal(&self, coord: Coord) -> bool {
        matches!(self.cell(coord), Some(Cell::Empty))
    }

    /// Places `piece` at `coord`.
    ///
    /// Precondition: `is_legal(coord)`. Violating it is a programming error,
    /// not a recoverable condition: debug builds assert, release builds
    /// overwrite with an unspecified occupancy count. Callers go through the
    /// match controller, which gates every application with the
    /// [`LegalMove`](super::LegalMove) contract.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, coord: Coord, piece: Piece) {
        debug_assert!(
            self.is_legal(coord),
            "apply_move precondition violated at {coord}"
        );
        let index = self.index(coord);
        self.cells[index] = Cell::Occupied(piece);
        self.occupied += 1;
    }

    /// Checks whether the piece just placed at `coord` completed a winning
    /// line.
    ///
    /// Scans only the neighborhood of the placement, so the per-move cost is
    /// proportional to the win length rather than the board area. Pure query.
    #[instrument(skip(self))]
    pub fn check_win(&self, coord: Coord, piece: Piece) -> Option<WinKind> {
        rules::win::scan(self, coord, piece)
    }

    /// True when every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::draw::is_full(self)
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// All cells in row-major order, a read-only snapshot for rendering.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Vacant coordinates in row-major order.
    pub fn vacancies(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().enumerate().filter_map(|(index, cell)| {
            (*cell == Cell::Empty).then(|| Coord::new(index / self.size, index % self.size))
        })
    }

    /// A new empty board with the same size and win-length policy.
    pub fn cleared(&self) -> Self {
        Self {
            size: self.size,
            win_length: self.win_length,
            cells: vec![Cell::Empty; self.size * self.size],
            occupied: 0,
        }
    }

    /// Formats the grid as plain text, one row per line.
    pub fn render(&self) -> String {
        let mut result = String::new();
        let rule = vec!["-"; self.size].join("+");
        for row in 0..self.size {
            if row > 0 {
                result.push_str(&rule);
                result.push('\n');
            }
            for col in 0..self.size {
                if col > 0 {
                    result.push('|');
                }
                match self.cells[row * self.size + col] {
                    Cell::Empty => result.push('.'),
                    Cell::Occupied(piece) => result.push_str(&piece.to_string()),
                }
            }
            result.push('\n');
        }
        result
    }
}
