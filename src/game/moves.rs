use crate::card::Card;
use crate::error::MoveError;
use crate::game::SEATS;
use crate::hand::Hand;
use crate::options::{GameOptions, VacantSeatPolicy};
use crate::result::MoveOutcome;

use super::{Game, GameState, Table};

impl Table {
    /// Validates and applies a play or pass by `player`.
    ///
    /// `None` or an empty index list is a pass.
    pub(crate) fn check_move(
        &mut self,
        options: &GameOptions,
        player: usize,
        indices: Option<&[usize]>,
    ) -> Result<MoveOutcome, MoveError> {
        let GameState::AwaitingMove { player: active } = self.state else {
            return Err(MoveError::InvalidState);
        };
        let seat = self.players.get(player).ok_or(MoveError::PlayerNotFound)?;
        if player != active {
            return Err(MoveError::NotYourTurn);
        }

        let selected = match indices {
            Some(indices) if !indices.is_empty() => Some(seat.cards().select(indices)?),
            _ => None,
        };
        let hand = selected
            .as_ref()
            .and_then(|cards| Hand::classify(player, cards.as_slice()));
        let leads = self.leader() == Some(player);

        let Some(top) = self.hands_on_table.last() else {
            if selected.is_none() {
                return Err(MoveError::CannotPassFirstMove);
            }
            let hand = hand.ok_or(MoveError::InvalidHand)?;
            if !leads && !hand.contains(&Card::THREE_OF_DIAMONDS) {
                return Err(MoveError::MissingThreeOfDiamonds);
            }
            return Ok(self.accept(options, hand));
        };

        if selected.is_none() {
            if leads {
                return Err(MoveError::CannotPassOwnLead);
            }
            log::debug!("seat {player} passes");
            self.advance(options);
            return Ok(MoveOutcome {
                player,
                hand: None,
                state: self.state,
            });
        }

        let hand = hand.ok_or(MoveError::InvalidHand)?;
        if !leads {
            if hand.len() != top.len() {
                return Err(MoveError::SizeMismatch {
                    expected: top.len(),
                    found: hand.len(),
                });
            }
            if !hand.beats(top) {
                return Err(MoveError::DoesNotBeat);
            }
        }

        Ok(self.accept(options, hand))
    }

    fn accept(&mut self, options: &GameOptions, hand: Hand) -> MoveOutcome {
        let player = hand.player();
        self.players[player]
            .cards_mut()
            .remove_all(hand.cards().as_slice());
        log::debug!("seat {player} plays {hand}");
        self.hands_on_table.push(hand.clone());
        self.free_lead = None;

        if let Some(winner) = self.players.iter().position(|p| p.cards().is_empty()) {
            log::info!("round over, seat {winner} wins");
            self.state = GameState::RoundOver { winner };
        } else {
            self.advance(options);
        }

        self.assert_card_count();

        MoveOutcome {
            player,
            hand: Some(hand),
            state: self.state,
        }
    }

    /// Moves the turn to the next seat.
    ///
    /// Under [`VacantSeatPolicy::AutoPass`] vacant seats are skipped. Skipping
    /// the seat that owns the lead gives the next occupied seat a free lead.
    pub(crate) fn advance(&mut self, options: &GameOptions) {
        let GameState::AwaitingMove { player: current } = self.state else {
            return;
        };

        let mut next = (current + 1) % SEATS;
        if options.vacant_seat == VacantSeatPolicy::AutoPass {
            let leader = self.leader();
            let mut lead_lost = !self.players[current].is_occupied() && leader == Some(current);
            for _ in 1..SEATS {
                if self.players[next].is_occupied() {
                    break;
                }
                log::debug!("seat {next} is vacant, passing");
                lead_lost |= leader == Some(next);
                next = (next + 1) % SEATS;
            }
            if lead_lost && self.players[next].is_occupied() {
                self.free_lead = Some(next);
            }
        }

        self.state = GameState::AwaitingMove { player: next };
    }
}

impl Game {
    /// Validates and applies a move by `player`.
    ///
    /// `cards` holds indices into the player's current cards; `None` or an
    /// empty slice is a pass. On success the hand (if any) is placed on the
    /// table, its cards leave the player's hand, and the turn moves on. If
    /// the player's hand is now empty the round is over.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, it is not the player's
    /// turn, an index is out of range or repeated, the cards form no valid
    /// hand, or the move breaks the opening, passing, size, or ranking rules.
    /// A rejected move changes nothing.
    ///
    /// # Panics
    ///
    /// Panics if the cards held and played no longer add up to one deck,
    /// which indicates a bug rather than a bad move.
    pub fn check_move(
        &self,
        player: usize,
        cards: Option<&[usize]>,
    ) -> Result<MoveOutcome, MoveError> {
        self.with_table(|table, options| table.check_move(options, player, cards))
            .inspect_err(|err| log::debug!("seat {player} move rejected: {err}"))
    }

    /// Plays the cards at `cards` from the player's hand.
    ///
    /// # Errors
    ///
    /// See [`Game::check_move`].
    pub fn play(&self, player: usize, cards: &[usize]) -> Result<MoveOutcome, MoveError> {
        self.check_move(player, Some(cards))
    }

    /// Passes the turn.
    ///
    /// # Errors
    ///
    /// See [`Game::check_move`].
    pub fn pass(&self, player: usize) -> Result<MoveOutcome, MoveError> {
        self.check_move(player, None)
    }
}
