//! Game engine and round flow.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Rank;
use crate::contestant::{Dealer, Player};
use crate::deck::Deck;
use crate::error::{ActionError, DealError, RoundError, ShowdownError};
use crate::options::GameOptions;
use crate::result::{RoundOutcome, RoundResult};
use crate::table::{TableEvent, TableIo};

mod actions;
mod dealer;
pub mod state;

pub use actions::Command;
pub use dealer::DealerMove;
pub use state::RoundPhase;

/// A single-round blackjack engine: one player against the house dealer.
///
/// The game owns the deck, both seats, and the random number generator. Use
/// [`GameOptions`] to configure the deck size and the dealer's standing
/// threshold, and [`Game::play`] to drive a full round through a
/// [`TableIo`] collaborator. The individual phases are also exposed as
/// phase-checked operations ([`Game::deal`], [`Game::hit`], [`Game::stand`],
/// [`Game::dealer_play`], [`Game::showdown`]) for frontends that drive the
/// flow themselves.
pub struct Game {
    /// Remaining cards. Exposed so tests and simulations can stack the deck
    /// before dealing.
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    /// The human-controlled seat.
    player: Player,
    /// The automated seat.
    dealer: Dealer,
    /// Current round phase.
    phase: RoundPhase,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use twentyone::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            deck: Deck::with_decks(options.decks),
            options,
            player: Player::new(),
            dealer: Dealer::new(options.dealer_stand_min),
            phase: RoundPhase::AwaitingDeal,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the player seat.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer seat.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Draws one card, treating exhaustion as an action failure.
    fn draw(&mut self) -> Result<Rank, ActionError> {
        self.deck.draw(&mut self.rng).ok_or(ActionError::NoCards)
    }

    /// Deals two cards to the player, then two to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if cards were already dealt or the deck holds fewer
    /// than four cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.phase != RoundPhase::AwaitingDeal {
            return Err(DealError::InvalidState);
        }
        if self.deck.remaining() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            let card = self.draw().map_err(|_| DealError::NotEnoughCards)?;
            self.player.take(card);
        }
        for _ in 0..2 {
            let card = self.draw().map_err(|_| DealError::NotEnoughCards)?;
            self.dealer.take(card);
        }

        self.phase = RoundPhase::PlayerTurn;
        Ok(())
    }

    /// Plays a full round against the connected table.
    ///
    /// Deals, runs the player turn loop (re-prompting on unknown commands),
    /// runs the dealer turn loop unless the player already bust or hit 21,
    /// then evaluates the winner and reports the final hands through the
    /// display sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the round was already started or the deck runs
    /// out of cards mid-round.
    pub fn play<I: TableIo + ?Sized>(&mut self, io: &mut I) -> Result<RoundResult, RoundError> {
        self.deal()?;
        self.player_turn(io)?;
        self.dealer_turn(io)?;

        let result = self.settle();
        io.display(TableEvent::RoundOver(&result));
        Ok(result)
    }

    /// Builds the final result once the round is over.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is still in progress.
    pub fn showdown(&self) -> Result<RoundResult, ShowdownError> {
        if self.phase != RoundPhase::RoundOver {
            return Err(ShowdownError::InvalidState);
        }
        Ok(self.settle())
    }

    /// Evaluates the winner from both final scores and snapshots the hands.
    fn settle(&self) -> RoundResult {
        let player_score = self.player.score();
        let dealer_score = self.dealer.score();

        RoundResult {
            outcome: RoundOutcome::evaluate(player_score, dealer_score),
            player_score,
            dealer_score,
            player_hand: self.player.cards().to_vec(),
            dealer_hand: self.dealer.cards().to_vec(),
        }
    }
}
