//! Core domain types for tic-tac-toe.

use crate::Cell;
use serde::{Deserialize, Serialize};

/// A participant in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The human player, marking `X`.
    Human,
    /// The computer opponent, marking `O`.
    Computer,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }

    /// Returns the marker drawn in this seat's squares.
    pub fn marker(self) -> char {
        match self {
            Seat::Human => 'X',
            Seat::Computer => 'O',
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human => write!(f, "Player"),
            Seat::Computer => write!(f, "Computer"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square taken by a seat's marker.
    Taken(Seat),
}

/// Error that can occur when marking a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MarkError {
    /// The square is already taken.
    #[display("square {_0} is already taken")]
    SquareTaken(Cell),
}

impl std::error::Error for MarkError {}

/// 3x3 tic-tac-toe board, squares keyed by [`Cell`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in board order (cells 1-9).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.index()]
    }

    /// Places a seat's marker on an empty square.
    ///
    /// Squares only ever move from empty to taken; marking a taken square
    /// is an error, never an overwrite.
    ///
    /// # Errors
    ///
    /// Returns [`MarkError::SquareTaken`] if the square is not empty.
    pub fn mark(&mut self, cell: Cell, seat: Seat) -> Result<(), MarkError> {
        if !self.is_empty(cell) {
            return Err(MarkError::SquareTaken(cell));
        }
        self.squares[cell.index()] = Square::Taken(seat);
        Ok(())
    }

    /// Checks if the square at the given cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Returns the cells that are still open, in board order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|cell| self.is_empty(*cell))
            .collect()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as the wide ASCII grid shown at the terminal.
    ///
    /// Empty squares render as spaces so the grid keeps its shape.
    pub fn render(&self) -> String {
        let symbol = |cell: Cell| match self.get(cell) {
            Square::Empty => ' ',
            Square::Taken(seat) => seat.marker(),
        };

        let mut out = String::new();
        for (row, cells) in Cell::ALL.chunks(3).enumerate() {
            out.push_str("     |     |\n");
            out.push_str(&format!(
                "  {}  |  {}  |  {}\n",
                symbol(cells[0]),
                symbol(cells[1]),
                symbol(cells[2]),
            ));
            out.push_str("     |     |\n");
            if row < 2 {
                out.push_str("-----+-----+-----\n");
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolution state of a round.
///
/// A finished tie is a distinct value from a round still in progress, so
/// callers never have to infer "tie" from an absent winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The round is still being played.
    InProgress,
    /// A seat completed a winning line.
    Won(Seat),
    /// The board filled with no winner.
    Tie,
}
