use alloc::string::String;

use crate::error::SeatError;
use crate::options::{GameOptions, VacantSeatPolicy};
use crate::player::Player;

use super::{Game, GameState, Table};

fn validate_name(options: &GameOptions, name: &str) -> Result<String, SeatError> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > options.max_name_len {
        return Err(SeatError::InvalidName);
    }
    Ok(String::from(name))
}

impl Table {
    pub(crate) fn occupied(&self, seat: usize) -> Result<&Player, SeatError> {
        let player = self.players.get(seat).ok_or(SeatError::SeatNotFound)?;
        if !player.is_occupied() {
            return Err(SeatError::SeatVacant);
        }
        Ok(player)
    }

    fn occupied_mut(&mut self, seat: usize) -> Result<&mut Player, SeatError> {
        self.occupied(seat)?;
        self.players.get_mut(seat).ok_or(SeatError::SeatNotFound)
    }

    pub(crate) fn join(&mut self, options: &GameOptions, name: &str) -> Result<usize, SeatError> {
        let name = validate_name(options, name)?;
        let seat = self
            .players
            .iter()
            .position(|p| !p.is_occupied())
            .ok_or(SeatError::TableFull)?;

        log::info!("{name} takes seat {seat}");
        self.players[seat].seat(name);

        Ok(seat)
    }

    pub(crate) fn leave(&mut self, options: &GameOptions, seat: usize) -> Result<(), SeatError> {
        self.occupied_mut(seat)?.vacate();
        log::info!("seat {seat} is now vacant");

        if self.state == (GameState::AwaitingMove { player: seat })
            && options.vacant_seat == VacantSeatPolicy::AutoPass
        {
            // The opening lead moves on with the turn.
            if self.hands_on_table.is_empty() && self.free_lead.is_none() {
                self.free_lead = Some(seat);
            }
            self.advance(options);
        }

        Ok(())
    }

    pub(crate) fn rename(
        &mut self,
        options: &GameOptions,
        seat: usize,
        name: &str,
    ) -> Result<(), SeatError> {
        let name = validate_name(options, name)?;
        self.occupied_mut(seat)?.rename(name);
        Ok(())
    }

    /// Marks `seat` ready and returns whether a new round can be dealt.
    pub(crate) fn ready(&mut self, seat: usize) -> Result<bool, SeatError> {
        self.occupied_mut(seat)?.set_ready(true);
        Ok(self.all_ready())
    }

    fn all_ready(&self) -> bool {
        !matches!(self.state, GameState::AwaitingMove { .. })
            && self.players.iter().all(|p| p.is_occupied() && p.is_ready())
    }
}

impl Game {
    /// Seats a new player in the first vacant seat.
    ///
    /// The name is trimmed and must be between 1 and `max_name_len` characters.
    /// A player joining mid-round takes over the seat's cards. Returns the seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid or all seats are taken.
    pub fn join(&self, name: &str) -> Result<usize, SeatError> {
        self.with_table(|table, options| table.join(options, name))
    }

    /// Vacates a seat. The seat keeps its cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the seat does not exist or is already vacant.
    pub fn leave(&self, seat: usize) -> Result<(), SeatError> {
        self.with_table(|table, options| table.leave(options, seat))
    }

    /// Renames the player in `seat`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid or the seat is not occupied.
    pub fn rename(&self, seat: usize, name: &str) -> Result<(), SeatError> {
        self.with_table(|table, options| table.rename(options, seat, name))
    }

    /// Marks the player in `seat` ready for the next round.
    ///
    /// Returns `true` once all four seats are occupied and ready and no round
    /// is awaiting moves.
    ///
    /// # Errors
    ///
    /// Returns an error if the seat is not occupied.
    pub fn ready(&self, seat: usize) -> Result<bool, SeatError> {
        self.with_table(|table, _| table.ready(seat))
    }
}
