//! Outcome evaluation.

mod tie;
mod win;

pub use tie::is_full;
pub use win::{WIN_LINES, winning_mark};

use crate::types::{Board, Outcome};
use tracing::instrument;

/// Evaluates the board from scratch.
///
/// A complete line wins even on a full board; otherwise a full board is a tie.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = winning_mark(board) {
        return Outcome::Won(mark);
    }
    if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}
