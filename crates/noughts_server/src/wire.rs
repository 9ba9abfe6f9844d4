//! Numeric wire formats shared by the routes and the polling client.
//!
//! Cells are `0` empty, `1` X, `2` O. Roles use the same codes with `0` as the
//! observer. Outcomes add `3` for a tie.

use noughts_core::{Board, Cell, Mark, Position};
use tracing::debug;

/// Parses a path segment or typed line as a small code.
///
/// Anything that is not a number in `0..=255` becomes `0`, the sentinel that
/// every consumer treats as "none".
pub fn parse_code(segment: &str) -> u8 {
    segment.trim().parse().unwrap_or_else(|_| {
        debug!(segment, "Unparseable code, using sentinel");
        0
    })
}

/// Encodes the board as nine cell codes in row-major order.
pub fn cell_codes(board: &Board) -> [u8; 9] {
    board.cells().map(Cell::code)
}

/// Rebuilds a board from nine cell codes.
///
/// Returns `None` if there are not exactly nine codes or a code is unknown.
pub fn decode_board(codes: &[u8]) -> Option<Board> {
    if codes.len() != 9 {
        return None;
    }
    let mut board = Board::new();
    for (&code, position) in codes.iter().zip(Position::ALL) {
        match code {
            0 => {}
            code => board.place(Mark::from_code(code)?, position).ok()?,
        }
    }
    Some(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_code_sentinel() {
        assert_eq!(parse_code("2"), 2);
        assert_eq!(parse_code(" 7 "), 7);
        assert_eq!(parse_code("abc"), 0);
        assert_eq!(parse_code(""), 0);
        assert_eq!(parse_code("-1"), 0);
        assert_eq!(parse_code("1000"), 0);
    }

    #[test]
    fn test_board_codes() {
        let mut board = Board::new();
        board.place(Mark::X, Position::TopLeft).unwrap();
        board.place(Mark::O, Position::BottomRight).unwrap();
        let codes = cell_codes(&board);
        assert_eq!(codes, [1, 0, 0, 0, 0, 0, 0, 0, 2]);
        assert_eq!(decode_board(&codes), Some(board));
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert_eq!(decode_board(&[0; 8]), None);
        assert_eq!(decode_board(&[0, 0, 0, 0, 3, 0, 0, 0, 0]), None);
    }
}
