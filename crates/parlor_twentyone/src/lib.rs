//! Pure twenty-one game logic.
//!
//! Cards, the shuffled deck, the Ace-aware hand total, the dealer's fixed
//! drawing strategy, and round resolution. No terminal I/O lives here;
//! prompting and rendering belong to the `parlor_games` binary.
//!
//! # Example
//!
//! ```
//! use parlor_twentyone::{Deck, decide_winner};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let mut deck = Deck::shuffled(&mut rng);
//! let player = deck.deal_hand()?;
//! let dealer = deck.deal_hand()?;
//! assert_eq!(deck.len(), 48);
//! let _outcome = decide_winner(player.total(), dealer.total());
//! # Ok::<(), parlor_twentyone::DeckExhausted>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod card;
mod deck;
mod hand;
mod rules;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DeckExhausted};
pub use hand::Hand;
pub use rules::{DEALER_MIN, MAX_SCORE, RoundOutcome, dealer_should_hit, decide_winner};
