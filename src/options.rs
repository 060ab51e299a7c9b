//! Game configuration options.

/// Configuration options for a blackjack round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(2)
///     .with_dealer_stand_min(16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of 52-card decks in play.
    pub decks: u8,
    /// Score at which the dealer stands without busting.
    pub dealer_stand_min: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            dealer_stand_min: 17,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the score at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stand_min(16);
    /// assert_eq!(options.dealer_stand_min, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stand_min(mut self, stand_min: u8) -> Self {
        self.dealer_stand_min = stand_min;
        self
    }
}
