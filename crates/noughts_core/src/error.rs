//! Error taxonomy for placements and moves.

use crate::position::Position;
use crate::session::Role;
use crate::types::{Mark, Outcome};

/// Error returned by the board engine when a placement is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// Number outside `1..=9` (unparseable input arrives as `0`).
    #[display("Position {} is not on the board (expected 1-9)", _0)]
    InvalidPosition(u8),

    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),
}

impl std::error::Error for PlaceError {}

/// Error returned by the session coordinator when a move is refused.
///
/// Every variant leaves the session exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already has a result; reset to play again.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// The requesting role does not hold the active turn.
    #[display("Not {}'s turn, waiting for {}", role, active)]
    WrongTurn {
        /// Role that asked to move.
        role: Role,
        /// Mark whose turn it is.
        active: Mark,
    },

    /// Number outside `1..=9`.
    #[display("Position {} is not on the board (expected 1-9)", _0)]
    InvalidPosition(u8),

    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),
}

impl std::error::Error for MoveError {}

impl From<PlaceError> for MoveError {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::InvalidPosition(number) => MoveError::InvalidPosition(number),
            PlaceError::CellOccupied(position) => MoveError::CellOccupied(position),
        }
    }
}
