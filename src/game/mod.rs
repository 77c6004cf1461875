//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::{self, Mutex};

use crate::card::DECK_SIZE;
use crate::cards::CardList;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::RoundResult;

mod deal;
mod moves;
mod seats;
pub mod state;

pub use state::GameState;

/// Number of seats at the table.
pub const SEATS: usize = 4;

/// Cards dealt to each seat.
pub const CARDS_PER_PLAYER: usize = DECK_SIZE / SEATS;

/// Everything a transition reads or writes, kept behind one lock.
pub(crate) struct Table {
    players: [Player; SEATS],
    /// Accepted hands, oldest first.
    hands_on_table: Vec<Hand>,
    state: GameState,
    /// Seat allowed to lead freely because the owner of the lead left.
    free_lead: Option<usize>,
    rng: ChaCha8Rng,
}

impl Table {
    fn new(seed: u64) -> Self {
        Self {
            players: Default::default(),
            hands_on_table: Vec::new(),
            state: GameState::WaitingForPlayers,
            free_lead: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The seat that may lead a fresh trick, if any.
    fn leader(&self) -> Option<usize> {
        self.free_lead
            .or_else(|| self.hands_on_table.last().map(Hand::player))
    }

    fn card_counts(&self) -> [usize; SEATS] {
        core::array::from_fn(|seat| self.players[seat].cards().len())
    }

    pub(crate) fn round_result(&self) -> Option<RoundResult> {
        self.state.winner().map(|winner| RoundResult {
            winner,
            remaining: self.card_counts(),
        })
    }

    /// Cards held plus cards played must always make up one full deck.
    fn assert_card_count(&self) {
        if self.state == GameState::WaitingForPlayers {
            return;
        }
        let held: usize = self.card_counts().iter().sum();
        let played: usize = self.hands_on_table.iter().map(Hand::len).sum();
        assert_eq!(
            held + played,
            DECK_SIZE,
            "card count invariant violated: {held} held, {played} on the table"
        );
    }
}

/// A four-seat Big Two game that manages seats, dealing, and the turn order.
///
/// All state lives behind a single lock, so concurrent callers (one per
/// connection, for example) are serialized and every transition is applied
/// atomically. Use [`GameOptions`] to configure name limits and how vacant
/// seats are handled.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    table: Mutex<Table>,
}

impl Game {
    /// Creates a new game whose shuffles are driven by `seed`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bigtwo::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            table: Mutex::new(Table::new(seed)),
        }
    }

    pub(crate) fn with_table<R>(&self, f: impl FnOnce(&mut Table, &GameOptions) -> R) -> R {
        sync::with(&self.table, |table| f(table, &self.options))
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.table.lock().state
    }

    /// Returns the seat whose turn it is.
    ///
    /// Returns `None` if no round is awaiting a move.
    pub fn active_player(&self) -> Option<usize> {
        self.state().active_player()
    }

    /// Returns the winning seat once the round is over.
    pub fn winner(&self) -> Option<usize> {
        self.state().winner()
    }

    /// Returns the hands played this round, oldest first.
    pub fn hands_on_table(&self) -> Vec<Hand> {
        self.table.lock().hands_on_table.clone()
    }

    /// Returns the most recently played hand.
    pub fn last_hand(&self) -> Option<Hand> {
        self.table.lock().hands_on_table.last().cloned()
    }

    /// Returns a copy of the cards held by `seat`.
    pub fn player_cards(&self, seat: usize) -> Option<CardList> {
        self.with_table(|table, _| table.players.get(seat).map(|p| p.cards().clone()))
    }

    /// Returns the name of the player in `seat`, if it is occupied.
    pub fn player_name(&self, seat: usize) -> Option<String> {
        self.with_table(|table, _| {
            table
                .players
                .get(seat)
                .and_then(Player::name)
                .map(String::from)
        })
    }

    /// Returns a snapshot of every seat.
    pub fn players(&self) -> Vec<Player> {
        self.table.lock().players.to_vec()
    }

    /// Returns the number of occupied seats.
    pub fn player_count(&self) -> usize {
        self.with_table(|table, _| table.players.iter().filter(|p| p.is_occupied()).count())
    }

    /// Returns how many cards each seat holds.
    pub fn card_counts(&self) -> [usize; SEATS] {
        self.table.lock().card_counts()
    }

    /// Returns the winner and remaining card counts once the round is over.
    pub fn round_result(&self) -> Option<RoundResult> {
        self.table.lock().round_result()
    }
}
