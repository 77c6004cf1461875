//! Move and round result types.

use crate::game::{GameState, SEATS};
use crate::hand::Hand;

/// An accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    /// The seat that moved.
    pub player: usize,
    /// The hand placed on the table, or `None` for a pass.
    pub hand: Option<Hand>,
    /// The game state after the move.
    pub state: GameState,
}

impl MoveOutcome {
    /// Returns whether the move was a pass.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        self.hand.is_none()
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// The seat that emptied their hand.
    pub winner: usize,
    /// Cards left in each seat's hand.
    pub remaining: [usize; SEATS],
}
