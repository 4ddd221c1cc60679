//! A shuffled 52-card deck.

use crate::{Card, Hand, Rank, Suit};
use rand::Rng;
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Error drawing from a deck with no cards left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("the deck is out of cards")]
pub struct DeckExhausted;

impl std::error::Error for DeckExhausted {}

/// An ordered deck of cards, consumed from the back.
///
/// Built with all 52 suit/rank combinations and Fisher-Yates shuffled at
/// construction. Together with the hands dealt from it, the deck always
/// partitions the 52-card universe for the duration of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the full deck and shuffles it with the given RNG.
    #[instrument(skip(rng))]
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut cards: Vec<Card> = Suit::iter()
            .flat_map(|suit| Rank::iter().map(move |rank| Card::new(suit, rank)))
            .collect();
        cards.shuffle(rng);
        debug!(cards = cards.len(), "deck shuffled");
        Self { cards }
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckExhausted`] when no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckExhausted> {
        self.cards.pop().ok_or(DeckExhausted)
    }

    /// Draws the two-card starting hand.
    ///
    /// # Errors
    ///
    /// Returns [`DeckExhausted`] when fewer than two cards remain.
    pub fn deal_hand(&mut self) -> Result<Hand, DeckExhausted> {
        let mut hand = Hand::new();
        hand.push(self.draw()?);
        hand.push(self.draw()?);
        Ok(hand)
    }

    /// Number of cards left in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards left.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The remaining cards, back of the slice drawn first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
