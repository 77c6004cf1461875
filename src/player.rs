//! Seat occupants.

extern crate alloc;

use alloc::string::String;

use crate::cards::CardList;

/// A seat at the table and the cards dealt to it.
///
/// A seat keeps its cards when its player leaves, so cards are never lost
/// mid-round.
#[derive(Debug, Clone, Default)]
pub struct Player {
    name: Option<String>,
    cards: CardList,
    ready: bool,
}

impl Player {
    /// Returns the occupant's name, or `None` if the seat is vacant.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns whether someone sits here.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.name.is_some()
    }

    /// Returns whether the occupant is ready for the next round.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Returns the cards held by this seat.
    #[must_use]
    pub const fn cards(&self) -> &CardList {
        &self.cards
    }

    pub(crate) fn seat(&mut self, name: String) {
        self.name = Some(name);
        self.ready = false;
    }

    pub(crate) fn rename(&mut self, name: String) {
        self.name = Some(name);
    }

    pub(crate) fn vacate(&mut self) {
        self.name = None;
        self.ready = false;
    }

    pub(crate) const fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub(crate) const fn cards_mut(&mut self) -> &mut CardList {
        &mut self.cards
    }
}
