//! Round outcome types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Rank;

/// Outcome of a round, in evaluation priority order.
///
/// The order matters because the conditions overlap: a 21–21 round must
/// report as a tie, not as a blackjack for either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Both contestants finished on the same score.
    Tie,
    /// The player went over 21; the dealer wins.
    PlayerBust,
    /// The dealer went over 21; the player wins.
    DealerBust,
    /// The player finished on exactly 21.
    PlayerBlackjack,
    /// The dealer finished on exactly 21.
    DealerBlackjack,
    /// The player finished closer to 21.
    PlayerWins,
    /// The dealer finished closer to 21.
    DealerWins,
}

impl RoundOutcome {
    /// Evaluates the winner from both final scores. The first matching rule
    /// in the variant order wins.
    #[must_use]
    pub const fn evaluate(player_score: u8, dealer_score: u8) -> Self {
        if player_score == dealer_score {
            Self::Tie
        } else if player_score > 21 {
            Self::PlayerBust
        } else if dealer_score > 21 {
            Self::DealerBust
        } else if player_score == 21 {
            Self::PlayerBlackjack
        } else if dealer_score == 21 {
            Self::DealerBlackjack
        } else if player_score > dealer_score {
            Self::PlayerWins
        } else {
            Self::DealerWins
        }
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The evaluated outcome.
    pub outcome: RoundOutcome,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// The player's final hand in draw order.
    pub player_hand: Vec<Rank>,
    /// The dealer's final hand in draw order.
    pub dealer_hand: Vec<Rank>,
}
