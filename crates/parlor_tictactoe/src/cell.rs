//! Cell enum identifying the nine board squares.

use serde::{Deserialize, Serialize};

/// A square position on the board.
///
/// Squares are numbered 1-9 left to right, top to bottom; that number is
/// what the player types at the prompt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Cell {
    /// Square 1 (top-left).
    TopLeft,
    /// Square 2 (top-center).
    TopCenter,
    /// Square 3 (top-right).
    TopRight,
    /// Square 4 (middle-left).
    MiddleLeft,
    /// Square 5 (center).
    Center,
    /// Square 6 (middle-right).
    MiddleRight,
    /// Square 7 (bottom-left).
    BottomLeft,
    /// Square 8 (bottom-center).
    BottomCenter,
    /// Square 9 (bottom-right).
    BottomRight,
}

impl Cell {
    /// All 9 cells in board order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Converts the cell to a board index (0-8).
    pub fn index(self) -> usize {
        match self {
            Cell::TopLeft => 0,
            Cell::TopCenter => 1,
            Cell::TopRight => 2,
            Cell::MiddleLeft => 3,
            Cell::Center => 4,
            Cell::MiddleRight => 5,
            Cell::BottomLeft => 6,
            Cell::BottomCenter => 7,
            Cell::BottomRight => 8,
        }
    }

    /// The square number shown to the player (1-9).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Creates a cell from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Cell::ALL.get(index).copied()
    }

    /// Parses a square number as typed at the prompt ("1" through "9").
    ///
    /// Surrounding whitespace is ignored; anything else yields `None`.
    pub fn from_digit(s: &str) -> Option<Self> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(Self::from_index)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}
