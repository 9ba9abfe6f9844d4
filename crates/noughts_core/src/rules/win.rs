//! Win detection.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};

/// The 8 winning lines, checked in this order: rows, columns, diagonals.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the mark of the first complete line in table order, if any.
pub fn winning_mark(board: &Board) -> Option<Mark> {
    WIN_LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Cell::Marked(mark) if board.get(b) == Cell::Marked(mark) && board.get(c) == Cell::Marked(mark) => {
            Some(mark)
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for &pos in positions {
            board.place(mark, pos).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_mark(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            for mark in [Mark::X, Mark::O] {
                assert_eq!(winning_mark(&board_with(mark, &line)), Some(mark), "{:?}", line);
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = board_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        board.place(Mark::O, Position::TopRight).unwrap();
        assert_eq!(winning_mark(&board), None);
    }

    #[test]
    fn test_table_order_breaks_ties() {
        // Not reachable in play: the top row is checked before the middle row.
        let mut board = board_with(Mark::X, &[Position::TopLeft, Position::TopCenter, Position::TopRight]);
        for pos in [Position::MiddleLeft, Position::Center, Position::MiddleRight] {
            board.place(Mark::O, pos).unwrap();
        }
        assert_eq!(winning_mark(&board), Some(Mark::X));
    }
}
