//! Rank-count deck with uniform rank draws.

use rand::Rng;

use crate::card::Rank;

/// Remaining card counts per rank.
///
/// A draw picks uniformly among the ranks that still have cards left, so a
/// rank with one card remaining is as likely as one with four. A rank whose
/// count has reached zero is never selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining counts, indexed by [`Rank::ALL`] order.
    counts: [u8; Rank::ALL.len()],
}

impl Deck {
    /// Creates a single 52-card deck: four of each rank.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            counts: [4; Rank::ALL.len()],
        }
    }

    /// Creates a shoe holding the given number of 52-card decks.
    #[must_use]
    pub const fn with_decks(decks: u8) -> Self {
        Self {
            counts: [4u8.saturating_mul(decks); Rank::ALL.len()],
        }
    }

    /// Creates a deck with explicit per-rank counts, indexed by
    /// [`Rank::ALL`] order.
    ///
    /// Useful for stacked decks in tests and simulations.
    #[must_use]
    pub const fn from_counts(counts: [u8; Rank::ALL.len()]) -> Self {
        Self { counts }
    }

    /// Draws a uniformly random rank among those with cards remaining and
    /// decrements its count by exactly one.
    ///
    /// Returns `None` only when the deck is exhausted.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Rank> {
        let mut available = [Rank::Two; Rank::ALL.len()];
        let mut len = 0;

        for rank in Rank::ALL {
            if self.counts[rank.index()] > 0 {
                available[len] = rank;
                len += 1;
            }
        }

        if len == 0 {
            return None;
        }

        let rank = available[rng.random_range(0..len)];
        self.counts[rank.index()] -= 1;
        Some(rank)
    }

    /// Returns how many cards of `rank` remain.
    #[must_use]
    pub const fn count_of(&self, rank: Rank) -> u8 {
        self.counts[rank.index()]
    }

    /// Returns the total number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.counts.iter().map(|&count| count as usize).sum()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
