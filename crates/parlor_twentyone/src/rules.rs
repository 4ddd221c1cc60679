//! Dealer strategy and round resolution.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Highest total a hand may reach before it busts.
pub const MAX_SCORE: u32 = 21;

/// The dealer draws until reaching this total.
pub const DEALER_MIN: u32 = 17;

/// How a round resolved.
///
/// An explicit push variant keeps "tie" distinct from "undecided";
/// resolution only happens once both turns are over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The player beat the dealer.
    PlayerWins,
    /// The dealer beat the player.
    DealerWins,
    /// Equal totals; nobody wins.
    Push,
}

/// Whether the dealer keeps drawing at this total.
#[instrument]
pub fn dealer_should_hit(total: u32) -> bool {
    total < DEALER_MIN
}

/// Resolves a finished round from the two totals.
///
/// A busted player loses outright; the dealer's total is irrelevant.
/// Otherwise a busted dealer or the strictly greater total wins, and
/// equal totals push.
#[instrument]
pub fn decide_winner(player_total: u32, dealer_total: u32) -> RoundOutcome {
    if player_total > MAX_SCORE {
        return RoundOutcome::DealerWins;
    }
    if dealer_total > MAX_SCORE || player_total > dealer_total {
        return RoundOutcome::PlayerWins;
    }
    if player_total < dealer_total {
        return RoundOutcome::DealerWins;
    }
    RoundOutcome::Push
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busted_player_loses_regardless_of_dealer() {
        assert_eq!(decide_winner(22, 4), RoundOutcome::DealerWins);
        assert_eq!(decide_winner(22, 22), RoundOutcome::DealerWins);
    }

    #[test]
    fn test_busted_dealer_loses() {
        assert_eq!(decide_winner(20, 22), RoundOutcome::PlayerWins);
    }

    #[test]
    fn test_higher_total_wins() {
        assert_eq!(decide_winner(20, 19), RoundOutcome::PlayerWins);
        assert_eq!(decide_winner(18, 19), RoundOutcome::DealerWins);
    }

    #[test]
    fn test_equal_totals_push() {
        assert_eq!(decide_winner(19, 19), RoundOutcome::Push);
    }

    #[test]
    fn test_dealer_hits_below_seventeen() {
        assert!(dealer_should_hit(16));
        assert!(!dealer_should_hit(17));
        assert!(!dealer_should_hit(21));
    }
}
