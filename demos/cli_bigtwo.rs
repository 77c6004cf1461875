//! Hot-seat Big Two on the terminal.
//!
//! All four seats are played from one keyboard. Run with
//! `RUST_LOG=bigtwo=debug` to see the engine trace.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bigtwo::{Event, Game, GameOptions, Message, Recipient};

fn main() {
    env_logger::init();
    println!("Big Two hot-seat example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    for seat in 0..bigtwo::SEATS {
        let name = prompt_line(&format!("Name for seat {seat}: "));
        let name = if name.is_empty() {
            format!("Player {seat}")
        } else {
            name
        };
        report(&game.handle(Message::Join { name }));
    }

    loop {
        for seat in 0..bigtwo::SEATS {
            report(&game.handle(Message::Ready { player: seat }));
        }

        while let Some(active) = game.active_player() {
            print_table(&game, active);
            let input = prompt_line("Card indices separated by spaces, empty to pass: ");
            if input == "q" || input == "quit" {
                println!("Goodbye.");
                return;
            }

            let cards = match parse_indices(&input) {
                Some(cards) if cards.is_empty() => None,
                Some(cards) => Some(cards),
                None => {
                    println!("Please enter numbers only.");
                    continue;
                }
            };
            report(&game.handle(Message::Move {
                player: active,
                cards,
            }));
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => break,
        }
    }
}

fn parse_indices(input: &str) -> Option<Vec<usize>> {
    input
        .split_whitespace()
        .map(|part| part.parse::<usize>().ok())
        .collect()
}

fn name_of(game: &Game, seat: usize) -> String {
    game.player_name(seat)
        .unwrap_or_else(|| format!("Seat {seat}"))
}

fn report(events: &[Event]) {
    for event in events {
        let scope = match event.recipient() {
            Recipient::Everyone => "",
            Recipient::Player(_) | Recipient::Requester => "(private) ",
        };
        let line = match event {
            Event::Joined { player, name } => format!("{name} sits in seat {player}."),
            Event::Left { player } => format!("Seat {player} left the game."),
            Event::Renamed { player, name } => format!("Seat {player} is now {name}."),
            Event::Ready { player } => format!("Seat {player} is ready."),
            Event::Dealt { active } => format!("Cards dealt. Seat {active} opens."),
            Event::Played {
                player,
                kind,
                cards,
                ..
            } => format!("Seat {player}: {{{kind}}} {cards}"),
            Event::Passed { player, .. } => format!("Seat {player}: {{Pass}}"),
            Event::RoundOver(result) => {
                let mut line = format!("Game ends. Seat {} wins!", result.winner);
                for (seat, remaining) in result.remaining.iter().enumerate() {
                    if *remaining > 0 {
                        line.push_str(&format!("\n  Seat {seat} has {remaining} cards left."));
                    }
                }
                line
            }
            Event::Chat { name, text, .. } => format!("{name}: {text}"),
            Event::Rejected { error, .. } => colorize(&format!("Not a legal move: {error}"), "31"),
        };
        println!("{scope}{line}");
    }
}

fn print_table(game: &Game, active: usize) {
    println!();
    match game.last_hand() {
        Some(hand) => println!(
            "Table: {hand} played by {}",
            name_of(game, hand.player())
        ),
        None => println!("Table: empty"),
    }
    for (seat, count) in game.card_counts().iter().enumerate() {
        let marker = if seat == active { "*" } else { " " };
        println!("{marker} {} ({count} cards)", name_of(game, seat));
    }

    let cards = game.player_cards(active).unwrap_or_default();
    let line: Vec<String> = cards
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{index}:{}", colorize(&card.to_string(), "1")))
        .collect();
    println!("\n{}'s cards: {}", name_of(game, active), line.join(" "));
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
