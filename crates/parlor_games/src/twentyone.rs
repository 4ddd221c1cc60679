//! Interactive twenty-one session.
//!
//! Each round: shuffle, deal two cards each, play out the player's
//! hit-or-stay turn, then the dealer's fixed-strategy turn, and compare
//! totals.

use crate::console::{clear_screen, prompt, read_line};
use anyhow::{Context, Result};
use parlor_twentyone::{
    Card, Deck, Hand, MAX_SCORE, RoundOutcome, dealer_should_hit, decide_winner,
};
use rand::Rng;
use tracing::info;

const INVALID_CHOICE: &str = "Sorry, that's not a valid choice";

/// The player's hit-or-stay decision.
enum Choice {
    Hit,
    Stay,
}

/// Runs rounds of twenty-one until the player declines another.
pub fn run() -> Result<()> {
    let mut rng = rand::thread_rng();

    loop {
        play_round(&mut rng)?;
        prompt("--------------------------");
        if !play_again()? {
            break;
        }
    }

    prompt("Thanks for playing!");
    Ok(())
}

/// Plays a single round from shuffle to result.
fn play_round(rng: &mut impl Rng) -> Result<()> {
    let mut deck = Deck::shuffled(rng);
    let mut player = deck.deal_hand()?;
    let mut dealer = deck.deal_hand()?;
    let upcard = dealer.upcard().context("dealer hand dealt empty")?;

    player_turn(&mut deck, &mut player, upcard)?;
    let player_total = player.total();

    let outcome = if player.is_busted() {
        prompt("Looks like you busted");
        RoundOutcome::DealerWins
    } else {
        prompt("You chose to stay");

        dealer_turn(&mut deck, &mut dealer)?;
        let dealer_total = dealer.total();

        prompt(format!("Dealer hand: {dealer}"));
        if dealer_total > MAX_SCORE {
            prompt("Dealer busted");
        } else {
            prompt(format!("Dealer got {dealer_total}"));
        }

        decide_winner(player_total, dealer_total)
    };

    match outcome {
        RoundOutcome::PlayerWins => prompt("You won!"),
        RoundOutcome::DealerWins => prompt("You lost!"),
        RoundOutcome::Push => prompt("It's a tie!"),
    }

    Ok(())
}

/// The player's turn: show the hand, then hit or stay until bust or stay.
fn player_turn(deck: &mut Deck, hand: &mut Hand, upcard: Card) -> Result<()> {
    loop {
        clear_screen()?;

        let total = hand.total();
        prompt(format!("Your hand: {hand}"));
        prompt(format!("Your score: {total}"));
        prompt(format!("Dealer card: {upcard}"));

        if total > MAX_SCORE {
            break;
        }

        match hit_or_stay()? {
            Choice::Hit => {
                let card = deck.draw()?;
                info!(%card, "player hits");
                hand.push(card);
            }
            Choice::Stay => break,
        }
    }

    Ok(())
}

/// The dealer draws until reaching the dealer minimum.
fn dealer_turn(deck: &mut Deck, hand: &mut Hand) -> Result<()> {
    while dealer_should_hit(hand.total()) {
        let card = deck.draw()?;
        info!(%card, total = hand.total(), "dealer hits");
        hand.push(card);
    }
    Ok(())
}

/// Prompts until the player answers h or s, case-insensitively.
fn hit_or_stay() -> Result<Choice> {
    loop {
        prompt("Would you like to (h)it or (s)tay?");
        match read_line()?.to_lowercase().as_str() {
            "h" => return Ok(Choice::Hit),
            "s" => return Ok(Choice::Stay),
            _ => prompt(format!("{INVALID_CHOICE}: Please enter 'h' or 's'.")),
        }
    }
}

/// Asks the play-again question until the answer is y or n.
fn play_again() -> Result<bool> {
    loop {
        prompt("Play again? (y or n)");
        match read_line()?.to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => prompt(format!("{INVALID_CHOICE}: Please enter 'y' or 'n'.")),
        }
    }
}
