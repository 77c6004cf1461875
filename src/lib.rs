//! A Big Two rule engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages four seats, dealing, and
//! the turn-by-turn legality of plays and passes. [`Hand::classify`] turns a
//! set of cards into one of the recognized shapes and [`Hand::beats`] ranks
//! hands against each other. Transports talk to the engine through the
//! [`Message`] and [`Event`] vocabulary in [`protocol`].
//!
//! # Example
//!
//! ```no_run
//! use bigtwo::{Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! for name in ["Ann", "Bo", "Cy", "Di"] {
//!     game.join(name).unwrap();
//! }
//! let opener = game.deal_shuffled().unwrap();
//! let _ = game.player_cards(opener);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod cards;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod protocol;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit, standard_deck};
pub use cards::CardList;
pub use error::{DealError, EngineError, MoveError, SeatError};
pub use game::{CARDS_PER_PLAYER, Game, GameState, SEATS};
pub use hand::{Hand, HandKind};
pub use options::{GameOptions, VacantSeatPolicy};
pub use player::Player;
pub use protocol::{Event, Message, Recipient};
pub use result::{MoveOutcome, RoundResult};
