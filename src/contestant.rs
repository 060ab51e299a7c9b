//! Player and dealer seats.

use crate::card::Rank;
use crate::hand::Hand;
use crate::table::DealerView;

/// Turn status of a contestant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Still drawing.
    #[default]
    Active,
    /// Voluntarily stopped below 21.
    Standing,
    /// Reached 21 or beyond; bust and blackjack both end the turn.
    Done,
}

/// The human-controlled seat.
#[derive(Debug, Clone, Default)]
pub struct Player {
    /// The player's hand.
    hand: Hand,
    /// Current turn status.
    status: Status,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            status: Status::Active,
        }
    }

    /// Adds a drawn card to the hand, rescoring it.
    pub fn take(&mut self, rank: Rank) {
        self.hand.push(rank);
    }

    /// Applies the player status rule: any score of 21 or more ends the
    /// turn, covering both bust and blackjack.
    pub const fn evaluate_status(&mut self) {
        if self.hand.score() >= 21 {
            self.status = Status::Done;
        }
    }

    /// Marks the player as standing.
    pub const fn stand(&mut self) {
        self.status = Status::Standing;
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        self.hand.cards()
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.hand.score()
    }

    /// Returns the turn status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns whether the player has stood.
    #[must_use]
    pub fn has_stood(&self) -> bool {
        self.status == Status::Standing
    }

    /// Returns whether the turn ended on a bust or a 21.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }
}

/// The automated seat.
///
/// The dealer never chooses: every move is driven by score thresholds.
#[derive(Debug, Clone)]
pub struct Dealer {
    /// The dealer's hand.
    hand: Hand,
    /// Current turn status.
    status: Status,
    /// Score at which the dealer stands without busting.
    stand_min: u8,
}

impl Dealer {
    /// Creates a dealer that stands once its score reaches `stand_min`
    /// without busting.
    #[must_use]
    pub const fn new(stand_min: u8) -> Self {
        Self {
            hand: Hand::new(),
            status: Status::Active,
            stand_min,
        }
    }

    /// Adds a drawn card to the hand, rescoring it.
    pub fn take(&mut self, rank: Rank) {
        self.hand.push(rank);
    }

    /// Applies the house rule: stand in `[stand_min, 21)`, stop at 21 or
    /// beyond.
    pub const fn evaluate_status(&mut self) {
        let score = self.hand.score();
        if score >= 21 {
            self.status = Status::Done;
        } else if score >= self.stand_min {
            self.status = Status::Standing;
        }
    }

    /// Returns the up card: the only card shown while the player is still
    /// deciding.
    #[must_use]
    pub fn up_card(&self) -> Option<Rank> {
        self.hand.cards().first().copied()
    }

    /// Returns the view the player is allowed to see.
    ///
    /// Only the up card shows until the player stands. The view is computed
    /// fresh from `player_stood` on every call; nothing about visibility is
    /// stored on the dealer.
    #[must_use]
    pub fn view(&self, player_stood: bool) -> DealerView<'_> {
        if player_stood {
            DealerView::Revealed {
                cards: self.hand.cards(),
                score: self.hand.score(),
            }
        } else {
            DealerView::Masked {
                up_card: self.up_card(),
            }
        }
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        self.hand.cards()
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.hand.score()
    }

    /// Returns the turn status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns whether the dealer has reached its standing threshold.
    #[must_use]
    pub fn has_stood(&self) -> bool {
        self.status == Status::Standing
    }

    /// Returns whether the turn ended on a bust or a 21.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }
}
