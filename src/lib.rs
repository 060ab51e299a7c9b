//! A single-round blackjack engine with optional `no_std` support.
//!
//! One human-controlled player faces an automated dealer that stands on a
//! fixed score threshold. The crate provides a [`Game`] type that manages
//! the round flow — deal, player turn, dealer turn, showdown — and a
//! [`TableIo`] seam through which a frontend prompts the player and renders
//! the table.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let game = Game::new(options, 42);
//! let _ = game;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod contestant;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod table;

// Re-export main types
pub use card::{DECK_SIZE, Rank};
pub use contestant::{Dealer, Player, Status};
pub use deck::Deck;
pub use error::{ActionError, DealError, RoundError, ShowdownError};
pub use game::{Command, DealerMove, Game, RoundPhase};
pub use hand::Hand;
pub use options::GameOptions;
pub use result::{RoundOutcome, RoundResult};
pub use table::{DealerView, TableEvent, TableIo};
