//! Draw detection.

use super::super::board::Board;

/// True when every cell on the board is occupied.
///
/// A full board with no winner is a draw; the controller checks the win
/// scan first, so fullness alone decides here.
pub fn is_full(board: &Board) -> bool {
    board.occupied() == board.size() * board.size()
}

#[cfg(test)]
mod tests {
    use super::super::super::coord::Coord;
    use super::super::super::types::Piece;
    use super::super::win::scan;
    use super::*;

    fn is_draw(board: &Board, last: Coord, piece: Piece) -> bool {
        is_full(board) && scan(board, last, piece).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3).unwrap();
        board.apply_move(Coord::new(1, 1), Piece::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(3).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                board.apply_move(Coord::new(row, col), Piece::X);
            }
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_drawn_position() {
        // X O X / O X X / O X O — full, no line for either piece.
        let mut board = Board::new(3).unwrap();
        let placements = [
            (0, 0, Piece::X),
            (0, 1, Piece::O),
            (0, 2, Piece::X),
            (1, 0, Piece::O),
            (1, 1, Piece::X),
            (1, 2, Piece::X),
            (2, 0, Piece::O),
            (2, 1, Piece::X),
            (2, 2, Piece::O),
        ];
        for (row, col, piece) in placements {
            board.apply_move(Coord::new(row, col), piece);
        }
        assert!(is_draw(&board, Coord::new(2, 1), Piece::X));
    }
}
