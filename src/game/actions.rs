use crate::card::Rank;
use crate::error::ActionError;
use crate::table::{TableEvent, TableIo};

use super::{Game, RoundPhase};

/// A parsed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Draw one card.
    Hit,
    /// End the turn without drawing.
    Stand,
}

impl Command {
    /// Parses a raw prompt token.
    ///
    /// Exactly `"H"` and `"S"` are recognized, case-sensitive; anything
    /// else is no action.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "H" => Some(Self::Hit),
            "S" => Some(Self::Stand),
            _ => None,
        }
    }
}

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// Rescores the hand and evaluates the player's status; a bust or a 21
    /// ends the round immediately, skipping the dealer turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is
    /// exhausted.
    pub fn hit(&mut self) -> Result<Rank, ActionError> {
        if self.phase != RoundPhase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.draw()?;
        self.player.take(card);
        self.player.evaluate_status();

        // The player resolves first: a bust or 21 here means the dealer
        // never plays.
        if self.player.is_done() {
            self.phase = RoundPhase::RoundOver;
        }

        Ok(card)
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if self.phase != RoundPhase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        self.player.stand();
        self.phase = RoundPhase::DealerTurn;
        Ok(())
    }

    /// Runs the player turn loop against the table.
    ///
    /// Each iteration shows both hands (dealer masked), checks whether the
    /// player's turn ended on a score threshold, and otherwise prompts for
    /// a command. Unknown commands change nothing and re-prompt.
    pub(super) fn player_turn<I: TableIo + ?Sized>(
        &mut self,
        io: &mut I,
    ) -> Result<(), ActionError> {
        loop {
            io.display(TableEvent::DealerHand(
                self.dealer.view(self.player.has_stood()),
            ));
            io.display(TableEvent::PlayerHand {
                cards: self.player.cards(),
                score: self.player.score(),
            });

            self.player.evaluate_status();
            if self.player.is_done() {
                self.phase = RoundPhase::RoundOver;
                return Ok(());
            }

            let raw = io.prompt();
            match Command::parse(&raw) {
                Some(Command::Hit) => {
                    self.hit()?;
                }
                Some(Command::Stand) => {
                    self.stand()?;
                    io.display(TableEvent::PlayerStands {
                        cards: self.player.cards(),
                        score: self.player.score(),
                    });
                    return Ok(());
                }
                None => io.display(TableEvent::InvalidCommand),
            }
        }
    }
}
