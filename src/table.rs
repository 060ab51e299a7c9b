//! The prompt/display seam between the engine and its frontend.

extern crate alloc;

use alloc::string::String;

use crate::card::Rank;
use crate::result::RoundResult;

/// What a frontend may show of the dealer's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerView<'a> {
    /// The player has not stood yet: only the up card shows.
    Masked {
        /// First card dealt to the dealer, if any.
        up_card: Option<Rank>,
    },
    /// The player has stood: the full hand and score show.
    Revealed {
        /// All dealer cards in draw order.
        cards: &'a [Rank],
        /// The dealer's current score.
        score: u8,
    },
}

/// A narration event emitted while a round plays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent<'a> {
    /// The player's hand and score, always fully revealed.
    PlayerHand {
        /// The player's cards in draw order.
        cards: &'a [Rank],
        /// The player's current score.
        score: u8,
    },
    /// The dealer's hand under the masking rule.
    DealerHand(DealerView<'a>),
    /// The player stood with this final hand.
    PlayerStands {
        /// The player's cards in draw order.
        cards: &'a [Rank],
        /// The player's final score.
        score: u8,
    },
    /// The dealer reached its threshold and stands.
    DealerStands {
        /// The dealer's cards in draw order.
        cards: &'a [Rank],
        /// The dealer's final score.
        score: u8,
    },
    /// The dealer drew another card.
    DealerHits,
    /// The prompt returned something other than a known command.
    InvalidCommand,
    /// The round is over.
    RoundOver(&'a RoundResult),
}

/// Console-style collaborator: one blocking prompt, one display sink.
///
/// The engine reads and writes nowhere else, so a frontend can be a real
/// console or a scripted recorder in tests.
pub trait TableIo {
    /// Asks the player for their next move and returns the raw token
    /// entered. The engine accepts exactly `"H"` and `"S"`; anything else
    /// is reported back as [`TableEvent::InvalidCommand`] and re-prompted.
    fn prompt(&mut self) -> String;

    /// Receives one narration event.
    fn display(&mut self, event: TableEvent<'_>);
}
