//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that reject a proposed move.
///
/// None of these mutate the game; the same player stays active and may retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    /// No round is awaiting a move.
    #[error("no round is awaiting a move")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// A card index is outside the player's hand.
    #[error("card index {0} is out of range")]
    InvalidCardIndex(usize),
    /// A card index was given more than once.
    #[error("card index {0} was selected twice")]
    DuplicateCardIndex(usize),
    /// The selected cards form no recognized hand.
    #[error("the selected cards do not form a valid hand")]
    InvalidHand,
    /// The opening move of a round cannot be a pass.
    #[error("the opening move cannot be a pass")]
    CannotPassFirstMove,
    /// The opening hand must contain the 3 of Diamonds.
    #[error("the opening hand must contain the 3 of Diamonds")]
    MissingThreeOfDiamonds,
    /// A player cannot pass on their own unanswered lead.
    #[error("cannot pass on your own lead")]
    CannotPassOwnLead,
    /// The hand has a different number of cards than the one on the table.
    #[error("expected {expected} cards, found {found}")]
    SizeMismatch {
        /// Cards in the hand on the table.
        expected: usize,
        /// Cards in the proposed hand.
        found: usize,
    },
    /// The hand does not beat the one on the table.
    #[error("the hand does not beat the hand on the table")]
    DoesNotBeat,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DealError {
    /// A round is still awaiting moves.
    #[error("a round is still in progress")]
    RoundInProgress,
    /// The deck does not hold exactly 52 cards.
    #[error("expected a 52-card deck, found {0} cards")]
    WrongDeckSize(usize),
    /// The deck holds a card with an out-of-range rank.
    #[error("invalid card {0}")]
    InvalidCard(Card),
    /// The deck holds the same card twice.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Errors from the seat registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeatError {
    /// All four seats are taken.
    #[error("the table is full")]
    TableFull,
    /// Seat index out of range.
    #[error("seat not found")]
    SeatNotFound,
    /// Nobody sits in this seat.
    #[error("seat is vacant")]
    SeatVacant,
    /// The name is empty or too long.
    #[error("invalid player name")]
    InvalidName,
}

/// Any error the engine reports back through the protocol layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    /// A rejected move.
    #[error(transparent)]
    Move(#[from] MoveError),
    /// A rejected deal.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A rejected seat operation.
    #[error(transparent)]
    Seat(#[from] SeatError),
}
