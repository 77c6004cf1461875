//! Hand shapes, classification and the "beats" relation.

use core::fmt;

use alloc::vec::Vec;

use crate::card::Card;
use crate::cards::CardList;
#[cfg(feature = "serde")]
use crate::error::MoveError;

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort_unstable();
    cards
}

fn same_rank(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].rank == w[1].rank)
}

fn is_straight(cards: &[Card]) -> bool {
    cards.len() == 5
        && sorted(cards)
            .windows(2)
            .all(|w| w[1].order_rank().checked_sub(w[0].order_rank()) == Some(1))
}

fn is_flush(cards: &[Card]) -> bool {
    cards.len() == 5 && cards.windows(2).all(|w| w[0].suit == w[1].suit)
}

fn is_full_house(cards: &[Card]) -> bool {
    if cards.len() != 5 {
        return false;
    }
    let c = sorted(cards);
    let triple_low = same_rank(&c[..3]) && same_rank(&c[3..]) && c[2].rank != c[3].rank;
    let triple_high = same_rank(&c[..2]) && same_rank(&c[2..]) && c[1].rank != c[2].rank;
    triple_low || triple_high
}

fn is_quad(cards: &[Card]) -> bool {
    if cards.len() != 5 {
        return false;
    }
    let c = sorted(cards);
    let quad_low = same_rank(&c[..4]) && c[3].rank != c[4].rank;
    let quad_high = same_rank(&c[1..]) && c[0].rank != c[1].rank;
    quad_low || quad_high
}

/// The shape of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandKind {
    /// One card.
    Single,
    /// Two cards of the same rank.
    Pair,
    /// Three cards of the same rank.
    Triple,
    /// Five cards of consecutive rank.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// A triple and a pair.
    FullHouse,
    /// Four cards of the same rank plus one kicker.
    Quad,
    /// Five cards of consecutive rank and the same suit.
    StraightFlush,
}

impl HandKind {
    /// Five-card shapes in classification priority order.
    const FIVE_CARD_PRIORITY: [Self; 5] = [
        Self::StraightFlush,
        Self::Quad,
        Self::FullHouse,
        Self::Flush,
        Self::Straight,
    ];

    /// Returns the type name of this shape.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Pair => "Pair",
            Self::Triple => "Triple",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "FullHouse",
            Self::Quad => "Quad",
            Self::StraightFlush => "StraightFlush",
        }
    }

    /// Returns the number of cards a hand of this shape holds.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Pair => 2,
            Self::Triple => 3,
            Self::Straight | Self::Flush | Self::FullHouse | Self::Quad | Self::StraightFlush => 5,
        }
    }

    /// Returns whether `cards` form a hand of this shape.
    ///
    /// Each check verifies the card count itself, so it can be used on any
    /// collection. A straight flush also satisfies `Straight` and `Flush`.
    #[must_use]
    pub fn matches(self, cards: &[Card]) -> bool {
        match self {
            Self::Single => cards.len() == 1,
            Self::Pair => cards.len() == 2 && same_rank(cards),
            Self::Triple => cards.len() == 3 && same_rank(cards),
            Self::Straight => is_straight(cards),
            Self::Flush => is_flush(cards),
            Self::FullHouse => is_full_house(cards),
            Self::Quad => is_quad(cards),
            Self::StraightFlush => is_straight(cards) && is_flush(cards),
        }
    }

    /// Returns the first shape, in priority order, that `cards` satisfy.
    #[must_use]
    pub fn classify(cards: &[Card]) -> Option<Self> {
        let candidates: &[Self] = match cards.len() {
            0 => return None,
            5 => &Self::FIVE_CARD_PRIORITY,
            3 => &[Self::Triple],
            2 => &[Self::Pair],
            _ => &[Self::Single],
        };
        candidates.iter().copied().find(|kind| kind.matches(cards))
    }
}

impl fmt::Display for HandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated hand played (or about to be played) by a seat.
///
/// Cards are stored sorted. A `Hand` can only be built through
/// [`Hand::classify`], so its shape always matches its cards. Deserialized
/// hands are classified again and rejected if the stored shape disagrees.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "HandRepr"))]
pub struct Hand {
    kind: HandKind,
    player: usize,
    cards: CardList,
}

/// Unchecked wire form of a [`Hand`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct HandRepr {
    kind: HandKind,
    player: usize,
    cards: CardList,
}

#[cfg(feature = "serde")]
impl TryFrom<HandRepr> for Hand {
    type Error = MoveError;

    fn try_from(repr: HandRepr) -> Result<Self, Self::Error> {
        Self::classify(repr.player, repr.cards.as_slice())
            .filter(|hand| hand.kind == repr.kind)
            .ok_or(MoveError::InvalidHand)
    }
}

impl Hand {
    /// Classifies `cards` played by seat `player`.
    ///
    /// Returns `None` if the cards are empty or match no shape.
    #[must_use]
    pub fn classify(player: usize, cards: &[Card]) -> Option<Self> {
        let kind = HandKind::classify(cards)?;
        let mut cards = CardList::from(cards);
        cards.sort();
        Some(Self {
            kind,
            player,
            cards,
        })
    }

    /// Returns the shape of the hand.
    #[must_use]
    pub const fn kind(&self) -> HandKind {
        self.kind
    }

    /// Returns the seat that played the hand.
    #[must_use]
    pub const fn player(&self) -> usize {
        self.player
    }

    /// Returns the cards in the hand, sorted.
    #[must_use]
    pub const fn cards(&self) -> &CardList {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always `false`; a classified hand holds at least one card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the card that decides comparisons against hands of the same shape.
    ///
    /// This is the highest card, except for a full house (highest card of the
    /// triple) and a quad (highest card of the four).
    #[must_use]
    pub fn top_card(&self) -> Card {
        let c = self.cards.as_slice();
        match self.kind {
            // c[2] always belongs to the triple of a sorted full house
            HandKind::FullHouse => {
                if c[2].rank == c[4].rank {
                    c[4]
                } else {
                    c[2]
                }
            }
            // c[1] always belongs to the four of a sorted quad
            HandKind::Quad => {
                if c[1].rank == c[4].rank {
                    c[4]
                } else {
                    c[3]
                }
            }
            _ => c[c.len() - 1],
        }
    }

    /// Returns whether this hand beats `other`.
    ///
    /// Same shapes compare top cards. Five-card shapes rank
    /// `StraightFlush > Quad > FullHouse > Flush > Straight` and beat any
    /// smaller hand. Singles, pairs and triples never beat a different shape.
    #[must_use]
    #[expect(
        clippy::match_same_arms,
        reason = "the shape hierarchy reads as a decision table"
    )]
    pub fn beats(&self, other: &Self) -> bool {
        use HandKind::{Flush, FullHouse, Quad, Straight, StraightFlush};

        match (self.kind, other.kind) {
            (a, b) if a == b => self.top_card() > other.top_card(),
            (StraightFlush, _) => true,
            (_, StraightFlush) => false,
            (Quad, _) => true,
            (_, Quad) => false,
            (FullHouse, _) => true,
            (_, FullHouse) => false,
            (Flush, _) => true,
            (_, Flush) => false,
            (Straight, _) => true,
            (_, Straight) => false,
            _ => false,
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}} {}", self.kind, self.cards)
    }
}
