//! Message-driven flows through the protocol adapter.

mod common;

use bigtwo::{
    Card, DECK_SIZE, EngineError, Event, Game, GameOptions, GameState, HandKind, Message,
    MoveError, Recipient, RoundResult, SEATS, SeatError, Suit,
};
use common::*;

fn join_all(game: &Game) {
    for name in ["North", "East", "South", "West"] {
        let events = game.handle(Message::Join {
            name: name.to_string(),
        });
        assert!(matches!(events[..], [Event::Joined { .. }]));
    }
}

fn move_message(game: &Game, player: usize, cards: &[Card]) -> Message {
    Message::Move {
        player,
        cards: Some(indices(game, player, cards)),
    }
}

#[test]
fn join_and_table_full() {
    let game = Game::new(GameOptions::default(), 3);
    let events = game.handle(Message::Join {
        name: " North ".to_string(),
    });
    assert_eq!(
        events,
        vec![Event::Joined {
            player: 0,
            name: "North".to_string()
        }]
    );
    assert_eq!(events[0].recipient(), Recipient::Everyone);

    for name in ["East", "South", "West"] {
        game.handle(Message::Join {
            name: name.to_string(),
        });
    }
    let events = game.handle(Message::Join {
        name: "Late".to_string(),
    });
    assert_eq!(
        events,
        vec![Event::Rejected {
            player: None,
            error: EngineError::Seat(SeatError::TableFull)
        }]
    );
    assert_eq!(events[0].recipient(), Recipient::Requester);
}

#[test]
fn last_ready_deals_a_round() {
    let game = Game::new(GameOptions::default(), 11);
    join_all(&game);

    for seat in 0..3 {
        assert_eq!(
            game.handle(Message::Ready { player: seat }),
            vec![Event::Ready { player: seat }]
        );
    }
    let events = game.handle(Message::Ready { player: 3 });
    assert_eq!(events.len(), 2);
    let &Event::Dealt { active } = &events[1] else {
        panic!("expected a deal, got {:?}", events[1]);
    };
    assert_eq!(game.active_player(), Some(active));
    assert!(
        game.player_cards(active)
            .unwrap()
            .contains(&Card::THREE_OF_DIAMONDS)
    );

    // readiness during a round does not redeal
    assert_eq!(
        game.handle(Message::Ready { player: 0 }),
        vec![Event::Ready { player: 0 }]
    );
}

#[test]
fn ready_without_auto_deal() {
    let game = Game::new(GameOptions::default().with_auto_deal(false), 11);
    join_all(&game);
    for seat in 0..4 {
        assert_eq!(
            game.handle(Message::Ready { player: seat }),
            vec![Event::Ready { player: seat }]
        );
    }
    assert_eq!(game.state(), GameState::WaitingForPlayers);
}

#[test]
fn rejected_move_goes_to_the_mover_only() {
    let game = Game::new(GameOptions::default(), 5);
    join_all(&game);
    let deck = deck_with([&[Card::THREE_OF_DIAMONDS], &[], &[], &[]]);
    assert_eq!(
        game.handle(Message::Deal { deck }),
        vec![Event::Dealt { active: 0 }]
    );

    let events = game.handle(Message::Move {
        player: 0,
        cards: None,
    });
    assert_eq!(
        events,
        vec![Event::Rejected {
            player: Some(0),
            error: EngineError::Move(MoveError::CannotPassFirstMove)
        }]
    );
    assert_eq!(events[0].recipient(), Recipient::Player(0));
    assert_eq!(game.active_player(), Some(0));
}

#[test]
fn bad_deck_is_rejected() {
    let game = Game::new(GameOptions::default(), 5);
    let events = game.handle(Message::Deal { deck: Vec::new() });
    assert_eq!(events[0].recipient(), Recipient::Requester);
    assert!(matches!(
        events[..],
        [Event::Rejected {
            error: EngineError::Deal(_),
            ..
        }]
    ));
}

#[test]
fn full_round_through_messages() {
    let game = Game::new(GameOptions::default(), 5);
    join_all(&game);
    let d3 = Card::THREE_OF_DIAMONDS;
    let winner = [
        d3,
        card(Suit::Hearts, THREE),
        card(Suit::Spades, THREE),
        card(Suit::Diamonds, FOUR),
        card(Suit::Clubs, FOUR),
    ];
    let kings = [
        card(Suit::Diamonds, KING),
        card(Suit::Clubs, KING),
        card(Suit::Hearts, KING),
        card(Suit::Spades, KING),
        card(Suit::Diamonds, FIVE),
    ];
    let last = [
        card(Suit::Diamonds, SIX),
        card(Suit::Clubs, SIX),
        card(Suit::Hearts, SIX),
    ];
    let mut seat_two: Vec<Card> = winner.to_vec();
    seat_two.extend_from_slice(&kings);
    seat_two.extend_from_slice(&last);
    let deck = deck_with([&[], &[], &seat_two, &[]]);
    game.handle(Message::Deal { deck });
    assert_eq!(game.active_player(), Some(2));

    let events = game.handle(move_message(&game, 2, &winner));
    let [
        Event::Played {
            player: 2,
            kind: HandKind::FullHouse,
            cards,
            state: GameState::AwaitingMove { player: 3 },
        },
    ] = &events[..]
    else {
        panic!("unexpected events {events:?}");
    };
    assert_eq!(cards.len(), 5);

    for seat in [3, 0, 1] {
        let events = game.handle(Message::Move {
            player: seat,
            cards: None,
        });
        assert!(matches!(events[..], [Event::Passed { player, .. }] if player == seat));
    }

    let events = game.handle(move_message(&game, 2, &kings));
    assert!(matches!(
        events[..],
        [Event::Played {
            kind: HandKind::Quad,
            ..
        }]
    ));
    for seat in [3, 0, 1] {
        game.handle(Message::Move {
            player: seat,
            cards: Some(Vec::new()),
        });
    }

    let events = game.handle(move_message(&game, 2, &last));
    assert_eq!(events.len(), 2, "{events:?}");
    assert_eq!(
        events[1],
        Event::RoundOver(RoundResult {
            winner: 2,
            remaining: [13, 13, 0, 13],
        })
    );
    assert_eq!(events[1].recipient(), Recipient::Everyone);
}

#[test]
fn chat_quit_and_rename() {
    let game = Game::new(GameOptions::default(), 5);
    join_all(&game);

    assert_eq!(
        game.handle(Message::Chat {
            player: 1,
            text: "hello".to_string()
        }),
        vec![Event::Chat {
            player: 1,
            name: "East".to_string(),
            text: "hello".to_string()
        }]
    );

    assert_eq!(
        game.handle(Message::Rename {
            player: 1,
            name: " Easty ".to_string()
        }),
        vec![Event::Renamed {
            player: 1,
            name: "Easty".to_string()
        }]
    );

    assert_eq!(
        game.handle(Message::Quit { player: 1 }),
        vec![Event::Left { player: 1 }]
    );
    assert_eq!(
        game.handle(Message::Chat {
            player: 1,
            text: "still here?".to_string()
        }),
        vec![Event::Rejected {
            player: Some(1),
            error: EngineError::Seat(SeatError::SeatVacant)
        }]
    );
}

#[test]
fn concurrent_messages_are_applied_one_at_a_time() {
    let game = Game::new(GameOptions::default(), 5);
    join_all(&game);
    let deck = deck_with([&[Card::THREE_OF_DIAMONDS], &[], &[], &[]]);
    game.handle(Message::Deal { deck });
    game.handle(move_message(&game, 0, &[Card::THREE_OF_DIAMONDS]));

    let accepted: Vec<Vec<Event>> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..SEATS)
            .map(|seat| {
                let game = &game;
                scope.spawn(move || {
                    let mut passes = Vec::new();
                    for round in 0..50 {
                        let events = game.handle(Message::Move {
                            player: seat,
                            cards: None,
                        });
                        passes.extend(
                            events
                                .into_iter()
                                .filter(|event| matches!(event, Event::Passed { .. })),
                        );
                        game.handle(Message::Chat {
                            player: seat,
                            text: format!("round {round}"),
                        });
                        game.handle(Message::Rename {
                            player: seat,
                            name: format!("Seat{seat}-{round}"),
                        });
                        game.handle(Message::Ready { player: seat });
                    }
                    passes
                })
            })
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().unwrap())
            .collect()
    });

    // the opener keeps the lead, every other seat passes exactly once, in turn
    assert!(accepted[0].is_empty());
    for seat in 1..SEATS {
        assert_eq!(
            accepted[seat],
            vec![Event::Passed {
                player: seat,
                state: GameState::AwaitingMove {
                    player: (seat + 1) % SEATS
                },
            }]
        );
    }

    assert_eq!(game.active_player(), Some(0));
    assert_eq!(game.hands_on_table().len(), 1);
    assert_eq!(game.last_hand().unwrap().player(), 0);
    let held: usize = game.card_counts().iter().sum();
    let played: usize = game.hands_on_table().iter().map(|h| h.len()).sum();
    assert_eq!(held + played, DECK_SIZE);
    assert_eq!(game.card_counts(), [12, 13, 13, 13]);
    for seat in 0..SEATS {
        assert_eq!(game.player_name(seat), Some(format!("Seat{seat}-49")));
    }
}
