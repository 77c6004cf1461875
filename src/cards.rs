//! Ordered card collections held by players and hands.

use core::fmt;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::MoveError;

/// An ordered, mutable collection of cards.
///
/// The collection is not kept sorted; call [`CardList::sort`] explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardList {
    cards: Vec<Card>,
}

impl CardList {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first card equal to `card`.
    ///
    /// Returns whether a card was removed.
    pub fn remove(&mut self, card: &Card) -> bool {
        if let Some(index) = self.position(card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    /// Removes every card of `other` from this collection.
    pub fn remove_all(&mut self, other: &[Card]) {
        self.cards.retain(|card| !other.contains(card));
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Replaces the card at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, card: Card) -> Option<Card> {
        self.cards
            .get_mut(index)
            .map(|slot| core::mem::replace(slot, card))
    }

    /// Returns the index of the first card equal to `card`.
    #[must_use]
    pub fn position(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    /// Returns whether the collection holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Sorts the cards by Big Two order (lowest first).
    pub fn sort(&mut self) {
        self.cards.sort_unstable();
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Copies the cards at `indices` into a new collection, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidCardIndex`] if an index is out of range and
    /// [`MoveError::DuplicateCardIndex`] if an index appears twice.
    pub fn select(&self, indices: &[usize]) -> Result<Self, MoveError> {
        let mut selected = Vec::with_capacity(indices.len());
        for (i, &index) in indices.iter().enumerate() {
            if indices[..i].contains(&index) {
                return Err(MoveError::DuplicateCardIndex(index));
            }
            let card = self
                .cards
                .get(index)
                .ok_or(MoveError::InvalidCardIndex(index))?;
            selected.push(*card);
        }
        Ok(Self { cards: selected })
    }
}

impl From<Vec<Card>> for CardList {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl From<&[Card]> for CardList {
    fn from(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }
}

impl FromIterator<Card> for CardList {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CardList {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for CardList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
