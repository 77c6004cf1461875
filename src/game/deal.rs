use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, standard_deck};
use crate::error::DealError;
use crate::options::{GameOptions, VacantSeatPolicy};

use super::{CARDS_PER_PLAYER, Game, GameState, Table};

fn validate_deck(deck: &[Card]) -> Result<(), DealError> {
    if deck.len() != DECK_SIZE {
        return Err(DealError::WrongDeckSize(deck.len()));
    }

    for (i, card) in deck.iter().enumerate() {
        if !card.is_valid() {
            return Err(DealError::InvalidCard(*card));
        }
        if deck[..i].contains(card) {
            return Err(DealError::DuplicateCard(*card));
        }
    }

    Ok(())
}

impl Table {
    pub(crate) fn deal(
        &mut self,
        options: &GameOptions,
        deck: &[Card],
    ) -> Result<usize, DealError> {
        if matches!(self.state, GameState::AwaitingMove { .. }) {
            return Err(DealError::RoundInProgress);
        }
        validate_deck(deck)?;

        self.hands_on_table.clear();
        self.free_lead = None;

        // Seat i receives cards 13*i .. 13*(i+1)
        let mut opener = 0;
        for (seat, (player, chunk)) in self
            .players
            .iter_mut()
            .zip(deck.chunks(CARDS_PER_PLAYER))
            .enumerate()
        {
            let cards = player.cards_mut();
            cards.clear();
            for &card in chunk {
                cards.push(card);
            }
            if cards.contains(&Card::THREE_OF_DIAMONDS) {
                opener = seat;
            }
            if options.sort_dealt_hands {
                cards.sort();
            }
            player.set_ready(false);
        }

        self.state = GameState::AwaitingMove { player: opener };
        log::info!("dealt a new round, seat {opener} holds the 3 of Diamonds");

        // Nobody can open for an empty seat; hand the opening lead on.
        if options.vacant_seat == VacantSeatPolicy::AutoPass
            && !self.players[opener].is_occupied()
        {
            self.free_lead = Some(opener);
            self.advance(options);
        }

        self.assert_card_count();

        Ok(self.state.active_player().unwrap_or(opener))
    }

    pub(crate) fn deal_shuffled(&mut self, options: &GameOptions) -> Result<usize, DealError> {
        let mut deck = standard_deck();
        deck.shuffle(&mut self.rng);
        self.deal(options, &deck)
    }
}

impl Game {
    /// Deals `deck` to the four seats and activates the holder of the 3 of Diamonds.
    ///
    /// Seat `i` receives cards `13 * i .. 13 * (i + 1)`. Dealing clears the table
    /// and every seat's ready flag. Returns the active seat.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is still awaiting moves, or the deck is not
    /// exactly 52 distinct valid cards.
    pub fn deal(&self, deck: &[Card]) -> Result<usize, DealError> {
        self.with_table(|table, options| table.deal(options, deck))
    }

    /// Shuffles a fresh deck with the game's random number generator and deals it.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is still awaiting moves.
    pub fn deal_shuffled(&self) -> Result<usize, DealError> {
        self.with_table(|table, options| table.deal_shuffled(options))
    }
}
