//! Interactive tic-tac-toe session.
//!
//! Rounds alternate the human and the computer until one wins or the
//! board fills, then offer another round.

use crate::console::{clear_screen, prompt, read_line};
use anyhow::{Context, Result};
use parlor_tictactoe::{
    Board, Cell, GameStatus, Seat, choose_computer_move, join_or, status,
};
use rand::Rng;
use tracing::info;

/// Seat that moves first in every round.
const STARTING_SEAT: Seat = Seat::Human;

const INVALID_CHOICE: &str = "Sorry, that's not a valid choice.";

/// Runs rounds of tic-tac-toe until the player declines another.
pub fn run() -> Result<()> {
    let mut rng = rand::thread_rng();

    loop {
        let mut board = Board::new();
        let mut current = STARTING_SEAT;

        loop {
            render(&board)?;
            take_turn(&mut board, current, &mut rng)?;
            current = current.opponent();
            if status(&board) != GameStatus::InProgress {
                break;
            }
        }

        render(&board)?;
        match status(&board) {
            GameStatus::Won(seat) => prompt(format!("{seat} won!")),
            _ => prompt("It's a tie!"),
        }

        if !play_again()? {
            break;
        }
    }

    prompt("Thanks for playing Tic Tac Toe!");
    Ok(())
}

/// Clears the screen and draws the marker legend and board.
fn render(board: &Board) -> Result<()> {
    clear_screen()?;
    println!(
        "You are {}. Computer is {}.",
        Seat::Human.marker(),
        Seat::Computer.marker()
    );
    println!();
    print!("{}", board.render());
    println!();
    Ok(())
}

/// Marks one square for the seat whose turn it is.
fn take_turn(board: &mut Board, seat: Seat, rng: &mut impl Rng) -> Result<()> {
    let cell = match seat {
        Seat::Human => choose_human_cell(board)?,
        Seat::Computer => {
            let cell = choose_computer_move(board, rng)
                .context("no open squares left for the computer")?;
            info!(square = cell.number(), "computer marks a square");
            cell
        }
    };
    board.mark(cell, seat)?;
    Ok(())
}

/// Prompts until the human names an open square.
fn choose_human_cell(board: &Board) -> Result<Cell> {
    loop {
        let numbers: Vec<u8> = board.empty_cells().iter().map(|c| c.number()).collect();
        prompt(format!("Choose a square: {}:", join_or(&numbers)));

        let answer = read_line()?;
        if let Some(cell) = Cell::from_digit(&answer) {
            if board.is_empty(cell) {
                return Ok(cell);
            }
        }
        prompt(INVALID_CHOICE);
    }
}

/// Asks the play-again question until the answer is y or n.
fn play_again() -> Result<bool> {
    loop {
        prompt("Play again? (y or n)");
        match read_line()?.to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => prompt(INVALID_CHOICE),
        }
    }
}
