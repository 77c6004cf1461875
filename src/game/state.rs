//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// No round has been dealt yet.
    #[default]
    WaitingForPlayers,
    /// Waiting for the given seat to play or pass.
    AwaitingMove {
        /// The active seat.
        player: usize,
    },
    /// A seat emptied their hand.
    RoundOver {
        /// The winning seat.
        winner: usize,
    },
}

impl GameState {
    /// Returns the active seat, if a move is awaited.
    #[must_use]
    pub const fn active_player(self) -> Option<usize> {
        match self {
            Self::AwaitingMove { player } => Some(player),
            _ => None,
        }
    }

    /// Returns the winner, if the round is over.
    #[must_use]
    pub const fn winner(self) -> Option<usize> {
        match self {
            Self::RoundOver { winner } => Some(winner),
            _ => None,
        }
    }
}
