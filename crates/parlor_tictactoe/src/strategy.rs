//! Heuristic computer opponent.
//!
//! The computer tries, in order: complete one of its own lines, block a
//! human line, take the center, then pick a random open square. Each step
//! runs only when the one before it produced nothing.

use crate::rules::WINNING_LINES;
use crate::{Board, Cell, Seat, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Finds the first at-risk square for the given seat.
///
/// A line is at risk when it holds exactly two of the seat's markers and
/// one empty square; that empty square is returned. Lines are scanned in
/// the fixed [`WINNING_LINES`] order, so the choice is reproducible.
#[instrument(skip(board))]
pub fn find_at_risk_cell(board: &Board, seat: Seat) -> Option<Cell> {
    for line in WINNING_LINES {
        let marked = line
            .iter()
            .filter(|&&cell| board.get(cell) == Square::Taken(seat))
            .count();
        if marked == 2 {
            if let Some(&open) = line.iter().find(|&&cell| board.is_empty(cell)) {
                return Some(open);
            }
        }
    }

    None
}

/// Chooses the computer's next square.
///
/// Returns `None` only when the board has no open squares, which a
/// correctly sequenced turn loop never allows.
#[instrument(skip(board, rng))]
pub fn choose_computer_move(board: &Board, rng: &mut impl Rng) -> Option<Cell> {
    // Offense - complete a winning line.
    if let Some(cell) = find_at_risk_cell(board, Seat::Computer) {
        debug!(square = cell.number(), "taking the winning square");
        return Some(cell);
    }

    // Defense - block the human's winning line.
    if let Some(cell) = find_at_risk_cell(board, Seat::Human) {
        debug!(square = cell.number(), "blocking the human's line");
        return Some(cell);
    }

    // Take the center when open.
    if board.is_empty(Cell::Center) {
        debug!("taking the center");
        return Some(Cell::Center);
    }

    // Fall back to a uniformly random open square.
    let open = board.empty_cells();
    let cell = open.choose(rng).copied();
    if let Some(cell) = cell {
        debug!(square = cell.number(), "choosing a random square");
    }
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_offense_completes_own_line() {
        // Computer holds 1 and 2; square 3 wins.
        let mut board = Board::new();
        board.mark(Cell::TopLeft, Seat::Computer).unwrap();
        board.mark(Cell::TopCenter, Seat::Computer).unwrap();
        board.mark(Cell::BottomLeft, Seat::Human).unwrap();
        board.mark(Cell::BottomCenter, Seat::Human).unwrap();

        assert_eq!(
            choose_computer_move(&board, &mut rng()),
            Some(Cell::TopRight)
        );
    }

    #[test]
    fn test_offense_beats_defense() {
        // Both seats threaten a line; the computer finishes its own.
        let mut board = Board::new();
        board.mark(Cell::TopLeft, Seat::Computer).unwrap();
        board.mark(Cell::TopCenter, Seat::Computer).unwrap();
        board.mark(Cell::MiddleLeft, Seat::Human).unwrap();
        board.mark(Cell::Center, Seat::Human).unwrap();

        assert_eq!(
            choose_computer_move(&board, &mut rng()),
            Some(Cell::TopRight)
        );
    }

    #[test]
    fn test_defense_blocks_human_line() {
        let mut board = Board::new();
        board.mark(Cell::TopLeft, Seat::Human).unwrap();
        board.mark(Cell::TopCenter, Seat::Human).unwrap();
        board.mark(Cell::Center, Seat::Computer).unwrap();

        assert_eq!(
            choose_computer_move(&board, &mut rng()),
            Some(Cell::TopRight)
        );
    }

    #[test]
    fn test_center_when_no_threats() {
        let mut board = Board::new();
        board.mark(Cell::TopLeft, Seat::Human).unwrap();

        assert_eq!(choose_computer_move(&board, &mut rng()), Some(Cell::Center));
    }

    #[test]
    fn test_random_fallback_picks_open_square() {
        // Center taken, no two-in-a-row anywhere.
        let mut board = Board::new();
        board.mark(Cell::Center, Seat::Human).unwrap();
        board.mark(Cell::TopLeft, Seat::Computer).unwrap();

        let mut rng = rng();
        for _ in 0..50 {
            let cell = choose_computer_move(&board, &mut rng).unwrap();
            assert!(board.is_empty(cell));
        }
    }

    #[test]
    fn test_no_open_squares_yields_none() {
        let mut board = Board::new();
        // O X O / X O X / X O X - full, no winner, alternating fill.
        let marks = [
            (Cell::TopLeft, Seat::Computer),
            (Cell::TopCenter, Seat::Human),
            (Cell::TopRight, Seat::Computer),
            (Cell::MiddleLeft, Seat::Human),
            (Cell::Center, Seat::Computer),
            (Cell::MiddleRight, Seat::Human),
            (Cell::BottomLeft, Seat::Human),
            (Cell::BottomCenter, Seat::Computer),
            (Cell::BottomRight, Seat::Human),
        ];
        for (cell, seat) in marks {
            board.mark(cell, seat).unwrap();
        }
        assert_eq!(choose_computer_move(&board, &mut rng()), None);
    }

    #[test]
    fn test_at_risk_ignores_blocked_lines() {
        // Two computer marks in the top row, but the third is human-held.
        let mut board = Board::new();
        board.mark(Cell::TopLeft, Seat::Computer).unwrap();
        board.mark(Cell::TopCenter, Seat::Computer).unwrap();
        board.mark(Cell::TopRight, Seat::Human).unwrap();

        assert_eq!(find_at_risk_cell(&board, Seat::Computer), None);
    }
}
