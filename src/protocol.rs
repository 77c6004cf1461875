//! Message vocabulary between the engine and a transport layer.
//!
//! A transport forwards each inbound [`Message`] to [`Game::handle`] and
//! delivers the returned [`Event`]s according to [`Event::recipient`]. Every
//! message, administrative or not, is applied under the game's single lock,
//! so the order in which `handle` calls complete is the order of play.

extern crate alloc;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::card::Card;
use crate::cards::CardList;
use crate::error::EngineError;
use crate::game::{Game, GameState};
use crate::hand::HandKind;
use crate::result::RoundResult;

/// An inbound request from a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// A new connection asks for a seat.
    Join {
        /// Requested display name.
        name: String,
    },
    /// A player leaves their seat.
    Quit {
        /// The seat being vacated.
        player: usize,
    },
    /// A player changes their display name.
    Rename {
        /// The seat.
        player: usize,
        /// The new name.
        name: String,
    },
    /// A player is ready for the next round.
    Ready {
        /// The seat.
        player: usize,
    },
    /// Deal a deck shuffled by the transport.
    Deal {
        /// The 52 cards to deal, seat 0 first.
        deck: Vec<Card>,
    },
    /// A play or pass.
    Move {
        /// The seat moving.
        player: usize,
        /// Indices into the seat's cards, or `None` to pass.
        cards: Option<Vec<usize>>,
    },
    /// A chat line.
    Chat {
        /// The sender.
        player: usize,
        /// The text.
        text: String,
    },
}

/// Who an [`Event`] should be delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    /// Every connection.
    Everyone,
    /// Only the player in this seat.
    Player(usize),
    /// Only the connection that sent the message (it has no seat yet).
    Requester,
}

/// An outbound notification produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A player took a seat.
    Joined {
        /// The seat.
        player: usize,
        /// The accepted (trimmed) name.
        name: String,
    },
    /// A seat was vacated.
    Left {
        /// The seat.
        player: usize,
    },
    /// A player changed their name.
    Renamed {
        /// The seat.
        player: usize,
        /// The new name.
        name: String,
    },
    /// A player is ready.
    Ready {
        /// The seat.
        player: usize,
    },
    /// A new round was dealt.
    Dealt {
        /// The seat holding the opening lead.
        active: usize,
    },
    /// A hand was placed on the table.
    Played {
        /// The seat that played.
        player: usize,
        /// The shape of the hand.
        kind: HandKind,
        /// The cards played, sorted.
        cards: CardList,
        /// The state after the play.
        state: GameState,
    },
    /// A seat passed.
    Passed {
        /// The seat that passed.
        player: usize,
        /// The state after the pass.
        state: GameState,
    },
    /// The round is over.
    RoundOver(RoundResult),
    /// A chat line from a seated player.
    Chat {
        /// The sender.
        player: usize,
        /// The sender's name.
        name: String,
        /// The text.
        text: String,
    },
    /// A request was refused.
    Rejected {
        /// The requesting seat, or `None` for a connection without one.
        player: Option<usize>,
        /// Why the request was refused.
        error: EngineError,
    },
}

impl Event {
    /// Returns who should receive this event.
    #[must_use]
    pub const fn recipient(&self) -> Recipient {
        match self {
            Self::Rejected {
                player: Some(player),
                ..
            } => Recipient::Player(*player),
            Self::Rejected { player: None, .. } => Recipient::Requester,
            _ => Recipient::Everyone,
        }
    }
}

fn rejected(player: Option<usize>, error: impl Into<EngineError>) -> Event {
    Event::Rejected {
        player,
        error: error.into(),
    }
}

impl Game {
    /// Applies one inbound message and returns the events it produced.
    ///
    /// When the last seat becomes ready and [`auto_deal`] is enabled, a
    /// shuffled deck is dealt in the same step.
    ///
    /// [`auto_deal`]: crate::GameOptions::auto_deal
    ///
    /// # Panics
    ///
    /// Panics if a move breaks card conservation; see [`Game::check_move`].
    pub fn handle(&self, message: Message) -> Vec<Event> {
        self.with_table(|table, options| match message {
            Message::Join { name } => match table.join(options, &name) {
                Ok(player) => vec![Event::Joined {
                    player,
                    name: table
                        .occupied(player)
                        .ok()
                        .and_then(|p| p.name())
                        .map(String::from)
                        .unwrap_or_default(),
                }],
                Err(err) => vec![rejected(None, err)],
            },
            Message::Quit { player } => match table.leave(options, player) {
                Ok(()) => vec![Event::Left { player }],
                Err(err) => vec![rejected(Some(player), err)],
            },
            Message::Rename { player, name } => match table.rename(options, player, &name) {
                Ok(()) => vec![Event::Renamed {
                    player,
                    name: String::from(name.trim()),
                }],
                Err(err) => vec![rejected(Some(player), err)],
            },
            Message::Ready { player } => match table.ready(player) {
                Ok(all_ready) => {
                    let mut events = vec![Event::Ready { player }];
                    if all_ready && options.auto_deal {
                        events.push(match table.deal_shuffled(options) {
                            Ok(active) => Event::Dealt { active },
                            Err(err) => rejected(Some(player), err),
                        });
                    }
                    events
                }
                Err(err) => vec![rejected(Some(player), err)],
            },
            Message::Deal { deck } => match table.deal(options, &deck) {
                Ok(active) => vec![Event::Dealt { active }],
                Err(err) => vec![rejected(None, err)],
            },
            Message::Move { player, cards } => {
                match table.check_move(options, player, cards.as_deref()) {
                    Ok(outcome) => {
                        let mut events = vec![match outcome.hand {
                            Some(hand) => Event::Played {
                                player,
                                kind: hand.kind(),
                                cards: hand.cards().clone(),
                                state: outcome.state,
                            },
                            None => Event::Passed {
                                player,
                                state: outcome.state,
                            },
                        }];
                        if let Some(result) = table.round_result() {
                            events.push(Event::RoundOver(result));
                        }
                        events
                    }
                    Err(err) => {
                        log::debug!("seat {player} move rejected: {err}");
                        vec![rejected(Some(player), err)]
                    }
                }
            }
            Message::Chat { player, text } => match table.occupied(player) {
                Ok(sender) => vec![Event::Chat {
                    player,
                    name: sender.name().map(String::from).unwrap_or_default(),
                    text,
                }],
                Err(err) => vec![rejected(Some(player), err)],
            },
        })
    }
}
