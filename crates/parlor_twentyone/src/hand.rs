//! Hands and the Ace-aware total.

use crate::rules::MAX_SCORE;
use crate::{Card, Rank};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The cards held by one participant, in the order they were dealt.
///
/// The total is recomputed from the cards on every call, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a dealt or drawn card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The cards in dealt order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The first card dealt - the dealer's visible card.
    pub fn upcard(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Computes the hand's value.
    ///
    /// All cards sum optimistically with Aces at 11; while the sum
    /// exceeds [`MAX_SCORE`], each Ace in turn gives up 10 points until
    /// the sum fits or no Aces remain.
    #[instrument]
    pub fn total(&self) -> u32 {
        let mut sum: u32 = self.cards.iter().map(|card| card.rank.base_value()).sum();
        let mut aces = self
            .cards
            .iter()
            .filter(|card| card.rank == Rank::Ace)
            .count();

        while sum > MAX_SCORE && aces > 0 {
            sum -= 10;
            aces -= 1;
        }

        sum
    }

    /// Whether the hand's value exceeds [`MAX_SCORE`].
    pub fn is_busted(&self) -> bool {
        self.total() > MAX_SCORE
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl std::fmt::Display for Hand {
    /// Cards separated by single spaces, e.g. `A-H Q-S`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;

    fn hand(cards: &[(Suit, Rank)]) -> Hand {
        cards
            .iter()
            .map(|&(suit, rank)| Card::new(suit, rank))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_total_no_aces() {
        let h = hand(&[(Suit::Hearts, Rank::Three), (Suit::Spades, Rank::Queen)]);
        assert_eq!(h.total(), 13);
    }

    #[test]
    fn test_total_ace_stays_eleven() {
        let h = hand(&[(Suit::Hearts, Rank::Ace), (Suit::Spades, Rank::Queen)]);
        assert_eq!(h.total(), 21);
    }

    #[test]
    fn test_total_second_ace_degrades() {
        let h = hand(&[(Suit::Hearts, Rank::Ace), (Suit::Spades, Rank::Ace)]);
        assert_eq!(h.total(), 12);
    }

    #[test]
    fn test_total_three_aces() {
        let h = hand(&[
            (Suit::Hearts, Rank::Ace),
            (Suit::Spades, Rank::Ace),
            (Suit::Diamonds, Rank::Ace),
        ]);
        assert_eq!(h.total(), 13);
    }

    #[test]
    fn test_total_ace_after_court() {
        let h = hand(&[
            (Suit::Hearts, Rank::Three),
            (Suit::Spades, Rank::Queen),
            (Suit::Diamonds, Rank::Ace),
        ]);
        assert_eq!(h.total(), 14);
    }

    #[test]
    fn test_total_degrades_only_as_needed() {
        let h = hand(&[
            (Suit::Hearts, Rank::Queen),
            (Suit::Spades, Rank::Ace),
            (Suit::Diamonds, Rank::Ace),
            (Suit::Hearts, Rank::Ace),
        ]);
        assert_eq!(h.total(), 13);
    }

    #[test]
    fn test_busted() {
        let h = hand(&[
            (Suit::Hearts, Rank::King),
            (Suit::Spades, Rank::Queen),
            (Suit::Diamonds, Rank::Five),
        ]);
        assert!(h.is_busted());
        assert_eq!(h.total(), 25);
    }

    #[test]
    fn test_display() {
        let h = hand(&[(Suit::Hearts, Rank::Ace), (Suit::Spades, Rank::Queen)]);
        assert_eq!(h.to_string(), "A-H Q-S");
    }
}
