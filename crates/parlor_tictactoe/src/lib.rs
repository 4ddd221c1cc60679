//! Pure tic-tac-toe game logic.
//!
//! This crate holds the board, rules, and the heuristic computer opponent.
//! It performs no terminal I/O; rendering and the turn loop belong to the
//! `parlor_games` binary.
//!
//! # Example
//!
//! ```
//! use parlor_tictactoe::{status, Board, Cell, GameStatus, Seat};
//!
//! let mut board = Board::new();
//! board.mark(Cell::TopLeft, Seat::Human)?;
//! assert_eq!(status(&board), GameStatus::InProgress);
//! # Ok::<(), parlor_tictactoe::MarkError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod format;
mod rules;
mod strategy;
mod types;

pub use cell::Cell;
pub use format::{join_or, join_or_with};
pub use rules::{WINNING_LINES, check_winner, is_full, status};
pub use strategy::{choose_computer_move, find_at_risk_cell};
pub use types::{Board, GameStatus, MarkError, Seat, Square};
