//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are separated from
//! board storage so the strategy module can reason over the same line
//! constants.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner};

use crate::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the board into a [`GameStatus`].
#[instrument]
pub fn status(board: &Board) -> GameStatus {
    match check_winner(board) {
        Some(seat) => GameStatus::Won(seat),
        None if is_full(board) => GameStatus::Tie,
        None => GameStatus::InProgress,
    }
}
