//! Helpers shared by the integration tests.

#![allow(dead_code)]

use bigtwo::{CARDS_PER_PLAYER, Card, Game, GameOptions, SEATS, Suit, standard_deck};

pub const ACE: u8 = 0;
pub const TWO: u8 = 1;
pub const THREE: u8 = 2;
pub const FOUR: u8 = 3;
pub const FIVE: u8 = 4;
pub const SIX: u8 = 5;
pub const SEVEN: u8 = 6;
pub const EIGHT: u8 = 7;
pub const NINE: u8 = 8;
pub const TEN: u8 = 9;
pub const JACK: u8 = 10;
pub const QUEEN: u8 = 11;
pub const KING: u8 = 12;

pub const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck where seat `i` is dealt `fixed[i]` plus filler cards.
///
/// The 3 of Diamonds must be listed in one of the fixed hands.
pub fn deck_with(fixed: [&[Card]; SEATS]) -> Vec<Card> {
    let used: Vec<Card> = fixed.iter().flat_map(|cards| cards.iter().copied()).collect();
    assert!(used.contains(&Card::THREE_OF_DIAMONDS));

    let mut rest = standard_deck()
        .into_iter()
        .filter(|card| !used.contains(card));
    let mut deck = Vec::new();
    for cards in fixed {
        deck.extend_from_slice(cards);
        deck.extend(rest.by_ref().take(CARDS_PER_PLAYER - cards.len()));
    }
    deck
}

/// A game with all four seats taken.
pub fn seated_game(options: GameOptions) -> Game {
    let game = Game::new(options, 7);
    for name in ["North", "East", "South", "West"] {
        game.join(name).unwrap();
    }
    game
}

/// Returns the positions of `cards` in the seat's current hand.
pub fn indices(game: &Game, seat: usize, cards: &[Card]) -> Vec<usize> {
    let held = game.player_cards(seat).unwrap();
    cards
        .iter()
        .map(|card| held.position(card).unwrap())
        .collect()
}

/// Plays `cards` from `seat`, panicking if the move is rejected.
pub fn play(game: &Game, seat: usize, cards: &[Card]) {
    let idx = indices(game, seat, cards);
    game.play(seat, &idx).unwrap();
}
