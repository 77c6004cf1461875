//! Card types and deck utilities.

use core::cmp::Ordering;
use core::fmt;

use alloc::vec::Vec;

/// Card suit, declared in Big Two order (lowest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Diamonds (lowest).
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades (highest).
    Spades,
}

impl Suit {
    /// All suits from lowest to highest.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Clubs, Self::Hearts, Self::Spades];

    const fn symbol(self) -> char {
        match self {
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }
}

/// A playing card.
///
/// Ranks are `0..=12` with `0` = Ace, `1` = Two, `2` = Three, ..., `12` = King.
/// Ace and Two are the two highest ranks in Big Two, so the total order on
/// cards is not the numeric order of `rank`; see [`Card::order_rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (0 = Ace, 1 = Two, ..., 12 = King).
    pub rank: u8,
}

impl Card {
    /// The 3 of Diamonds, which opens every round.
    pub const THREE_OF_DIAMONDS: Self = Self::new(Suit::Diamonds, 2);

    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 0..=12
    /// are accepted here but rejected when a deck is dealt.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the rank used for comparisons: Ace and Two map to 13 and 14,
    /// every other rank keeps its value.
    #[must_use]
    pub const fn order_rank(&self) -> u8 {
        if self.rank < 2 {
            self.rank + 13
        } else {
            self.rank
        }
    }

    /// Returns whether the rank is within `0..=12`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.rank < RANKS
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order_rank()
            .cmp(&other.order_rank())
            .then(self.suit.cmp(&other.suit))
            // keeps Ord consistent with Eq for out-of-range ranks
            .then(self.rank.cmp(&other.rank))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self.rank {
            0 => 'A',
            1 => '2',
            2..=8 => (b'1' + self.rank) as char,
            9 => 'T',
            10 => 'J',
            11 => 'Q',
            12 => 'K',
            _ => '?',
        };
        write!(f, "{rank}{}", self.suit.symbol())
    }
}

/// Number of ranks per suit.
pub const RANKS: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns an unshuffled 52-card deck in suit-major order.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in 0..RANKS {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}
