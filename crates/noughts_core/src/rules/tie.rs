//! Full-board detection.

use crate::types::{Board, Cell};

/// Checks if every cell holds a mark.
///
/// A full board with no complete line is a tie.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::evaluate;
    use super::*;
    use crate::position::Position;
    use crate::types::{Mark, Outcome};

    fn fill(board: &mut Board, layout: &str) {
        for (pos, ch) in Position::ALL.iter().zip(layout.chars()) {
            match ch {
                'X' => board.place(Mark::X, *pos).unwrap(),
                'O' => board.place(Mark::O, *pos).unwrap(),
                _ => {}
            }
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_in_progress() {
        let mut board = Board::new();
        fill(&mut board, "XO-------");
        assert!(!is_full(&board));
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn test_tie_detection() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        fill(&mut board, "XOXOXXOXO");
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), Outcome::Tie);
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        // X X X / O O X / X O O
        let mut board = Board::new();
        fill(&mut board, "XXXOOXXOO");
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), Outcome::Won(Mark::X));
    }
}
