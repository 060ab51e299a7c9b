//! Round phase types.

/// Phase of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Cards have not been dealt yet.
    AwaitingDeal,
    /// The player is drawing or standing.
    PlayerTurn,
    /// The dealer plays out its hand.
    DealerTurn,
    /// The round has ended and the result can be read.
    RoundOver,
}
