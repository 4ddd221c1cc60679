//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Seat, Square};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals, in that order.
///
/// Several callers depend on this ordering as a deterministic tie-break:
/// win detection reports the first matched line, and the computer's
/// at-risk scan returns the first qualifying square.
pub const WINNING_LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(seat)` if the seat holds three in a row, `None`
/// otherwise. Lines are scanned in the fixed [`WINNING_LINES`] order and
/// the first fully-owned line decides.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Seat> {
    for [a, b, c] in WINNING_LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Taken(seat) => Some(seat),
                Square::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        for cell in [Cell::TopLeft, Cell::TopCenter, Cell::TopRight] {
            board.mark(cell, Seat::Human).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Seat::Human));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        for cell in [Cell::TopCenter, Cell::Center, Cell::BottomCenter] {
            board.mark(cell, Seat::Computer).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Seat::Computer));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        for cell in [Cell::TopRight, Cell::Center, Cell::BottomLeft] {
            board.mark(cell, Seat::Computer).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Seat::Computer));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new();
        board.mark(Cell::TopLeft, Seat::Human).unwrap();
        board.mark(Cell::TopCenter, Seat::Human).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_detectable() {
        for line in WINNING_LINES {
            let mut board = Board::new();
            for cell in line {
                board.mark(cell, Seat::Human).unwrap();
            }
            assert_eq!(check_winner(&board), Some(Seat::Human), "line {line:?}");
        }
    }
}
