use alloc::vec::Vec;

use crate::card::Rank;
use crate::error::ActionError;
use crate::table::{TableEvent, TableIo};

use super::{Game, RoundPhase};

/// One table-driven dealer decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerMove {
    /// Below the standing threshold: the dealer drew this card.
    Hit(Rank),
    /// Threshold reached without busting: the dealer stands.
    Stand,
    /// The dealer reached 21 or bust; the round is over.
    Done,
}

impl Game {
    /// Advances the dealer by one decision.
    ///
    /// The dealer evaluates its status first: a score of 21 or more ends
    /// the round, a score in the standing range stands, and anything lower
    /// draws one card.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn, or the deck runs
    /// out while the dealer must draw.
    pub fn dealer_step(&mut self) -> Result<DealerMove, ActionError> {
        if self.phase != RoundPhase::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        self.dealer.evaluate_status();
        if self.dealer.is_done() {
            self.phase = RoundPhase::RoundOver;
            return Ok(DealerMove::Done);
        }
        if self.dealer.has_stood() {
            self.phase = RoundPhase::RoundOver;
            return Ok(DealerMove::Stand);
        }

        let card = self.draw()?;
        self.dealer.take(card);
        Ok(DealerMove::Hit(card))
    }

    /// Plays the dealer hand to completion, returning the drawn cards.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn, or the deck runs
    /// out while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Rank>, ActionError> {
        let mut drawn = Vec::new();
        loop {
            match self.dealer_step()? {
                DealerMove::Hit(card) => drawn.push(card),
                DealerMove::Stand | DealerMove::Done => return Ok(drawn),
            }
        }
    }

    /// Runs the dealer turn loop against the table, narrating each move.
    ///
    /// Does nothing when the player already ended the round; the dealer
    /// only plays after the player stands.
    pub(super) fn dealer_turn<I: TableIo + ?Sized>(
        &mut self,
        io: &mut I,
    ) -> Result<(), ActionError> {
        while self.phase == RoundPhase::DealerTurn {
            io.display(TableEvent::DealerHand(
                self.dealer.view(self.player.has_stood()),
            ));

            match self.dealer_step()? {
                DealerMove::Hit(_) => io.display(TableEvent::DealerHits),
                DealerMove::Stand => io.display(TableEvent::DealerStands {
                    cards: self.dealer.cards(),
                    score: self.dealer.score(),
                }),
                DealerMove::Done => {}
            }
        }
        Ok(())
    }
}
