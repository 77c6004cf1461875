//! Game configuration options.

/// What happens when the turn reaches a seat nobody occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum VacantSeatPolicy {
    /// Vacant seats pass automatically. If a vacant seat owns the current
    /// lead, the next occupied seat may lead freely.
    #[default]
    AutoPass,
    /// The turn stays on the vacant seat until someone takes it.
    Wait,
}

/// Configuration options for a Big Two game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bigtwo::{GameOptions, VacantSeatPolicy};
///
/// let options = GameOptions::default()
///     .with_max_name_len(12)
///     .with_vacant_seat(VacantSeatPolicy::Wait);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Maximum player name length, in characters.
    pub max_name_len: usize,
    /// Behavior when the turn reaches a vacant seat.
    pub vacant_seat: VacantSeatPolicy,
    /// Whether each player's cards are sorted after dealing.
    pub sort_dealt_hands: bool,
    /// Whether the protocol layer deals a shuffled deck once every seat is ready.
    pub auto_deal: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_name_len: 20,
            vacant_seat: VacantSeatPolicy::AutoPass,
            sort_dealt_hands: true,
            auto_deal: true,
        }
    }
}

impl GameOptions {
    /// Sets the maximum player name length.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_name_len(8);
    /// assert_eq!(options.max_name_len, 8);
    /// ```
    #[must_use]
    pub const fn with_max_name_len(mut self, len: usize) -> Self {
        self.max_name_len = len;
        self
    }

    /// Sets the vacant seat policy.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::{GameOptions, VacantSeatPolicy};
    ///
    /// let options = GameOptions::default().with_vacant_seat(VacantSeatPolicy::Wait);
    /// assert_eq!(options.vacant_seat, VacantSeatPolicy::Wait);
    /// ```
    #[must_use]
    pub const fn with_vacant_seat(mut self, policy: VacantSeatPolicy) -> Self {
        self.vacant_seat = policy;
        self
    }

    /// Sets whether dealt hands are sorted.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::GameOptions;
    ///
    /// let options = GameOptions::default().with_sort_dealt_hands(false);
    /// assert!(!options.sort_dealt_hands);
    /// ```
    #[must_use]
    pub const fn with_sort_dealt_hands(mut self, sort: bool) -> Self {
        self.sort_dealt_hands = sort;
        self
    }

    /// Sets whether a new round is dealt automatically once all seats are ready.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_deal(false);
    /// assert!(!options.auto_deal);
    /// ```
    #[must_use]
    pub const fn with_auto_deal(mut self, auto_deal: bool) -> Self {
        self.auto_deal = auto_deal;
        self
    }
}
