//! Board positions.

use crate::error::PlaceError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A square on the board.
///
/// Clients address squares with numbers 1-9, left to right and top to bottom.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (1)
    TopLeft,
    /// Top-center (2)
    TopCenter,
    /// Top-right (3)
    TopRight,
    /// Middle-left (4)
    MiddleLeft,
    /// Center (5)
    Center,
    /// Middle-right (6)
    MiddleRight,
    /// Bottom-left (7)
    BottomLeft,
    /// Bottom-center (8)
    BottomCenter,
    /// Bottom-right (9)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts a 1-based grid number.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::InvalidPosition`] unless `number` is in `1..=9`.
    #[instrument]
    pub fn from_number(number: u8) -> Result<Self, PlaceError> {
        match number {
            1..=9 => Ok(Self::ALL[usize::from(number - 1)]),
            _ => Err(PlaceError::InvalidPosition(number)),
        }
    }

    /// 1-based grid number.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// 0-based board index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl TryFrom<u8> for Position {
    type Error = PlaceError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_number_and_index_agree() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(usize::from(pos.number()), i + 1);
            assert_eq!(Position::from_number(pos.number()), Ok(pos));
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(Position::from_number(0), Err(PlaceError::InvalidPosition(0)));
        assert_eq!(Position::from_number(10), Err(PlaceError::InvalidPosition(10)));
        assert!(Position::try_from(255).is_err());
    }
}
