//! Core domain types for the board engine.

use crate::error::PlaceError;
use crate::position::Position;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// First player (moves first).
    X,
    /// Second player.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Wire code of the mark (`1` for X, `2` for O).
    pub fn code(self) -> u8 {
        match self {
            Mark::X => 1,
            Mark::O => 2,
        }
    }

    /// Decodes a wire code. Returns `None` for anything but `1` or `2`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Mark::X),
            2 => Some(Mark::O),
            _ => None,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Marked(Mark),
}

impl Cell {
    /// Wire code of the cell (`0` empty, otherwise the mark's code).
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Marked(mark) => mark.code(),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Marked(Mark::X) => 'X',
            Cell::Marked(Mark::O) => 'O',
        }
    }
}

/// Result of evaluating a board. Always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and empty cells remain.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// Board full with no complete line.
    Tie,
}

impl Outcome {
    /// Wire code (`0` in progress, `1` X wins, `2` O wins, `3` tie).
    pub fn code(self) -> u8 {
        match self {
            Outcome::InProgress => 0,
            Outcome::Won(mark) => mark.code(),
            Outcome::Tie => 3,
        }
    }

    /// Decodes a wire code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Outcome::InProgress),
            3 => Some(Outcome::Tie),
            other => Mark::from_code(other).map(Outcome::Won),
        }
    }

    /// True once the game has a winner or is tied.
    pub fn is_decided(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won(mark) => write!(f, "{} wins", mark),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

/// 3x3 board.
///
/// Cells are stored in row-major order, so the cell for a position lives at
/// `row * 3 + column`. The board never changes size; `reset` clears it in place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
        debug!("Board cleared");
    }

    /// Places `mark` at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::CellOccupied`] if the cell already holds a mark.
    /// The board is left untouched in that case.
    #[instrument(skip(self, position), fields(position = position.number()))]
    pub fn place(&mut self, mark: Mark, position: Position) -> Result<(), PlaceError> {
        let cell = &mut self.cells[position.index()];
        if *cell != Cell::Empty {
            debug!(occupant = ?cell, "Cell already occupied");
            return Err(PlaceError::CellOccupied(position));
        }
        *cell = Cell::Marked(mark);
        Ok(())
    }

    /// Returns the cell at `position`.
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks whether every cell is marked.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Evaluates the board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self)
    }

    /// Renders the board as three lines of `X`, `O` and `-`.
    pub fn render(&self) -> String {
        self.cells
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.symbol().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
