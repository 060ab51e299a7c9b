//! CLI blackjack demo.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{
    DealerView, Game, GameOptions, Rank, RoundOutcome, RoundResult, TableEvent, TableIo,
};

struct Console;

impl TableIo for Console {
    fn prompt(&mut self) -> String {
        print!("Would you like to (H)it or (S)tand? ");
        let _ = io::stdout().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return String::new();
        }
        input.trim_end_matches(['\r', '\n']).to_string()
    }

    fn display(&mut self, event: TableEvent<'_>) {
        match event {
            TableEvent::PlayerHand { cards, score } => {
                println!("Player has: {} = {score}", format_cards(cards));
            }
            TableEvent::DealerHand(DealerView::Masked { up_card }) => {
                let up = up_card.map_or_else(|| "?".to_string(), |card| card.to_string());
                println!("\nDealer has: {up} ? = ?");
            }
            TableEvent::DealerHand(DealerView::Revealed { cards, score }) => {
                println!("\nDealer has: {} = {score}", format_cards(cards));
            }
            TableEvent::PlayerStands { cards, score } => {
                println!("\nPlayer stands with: {} = {score}\n", format_cards(cards));
            }
            TableEvent::DealerStands { cards, score } => {
                println!("\nDealer stands with: {} = {score}", format_cards(cards));
            }
            TableEvent::DealerHits => println!("Dealer hits"),
            TableEvent::InvalidCommand => println!("Invalid command, please try again!"),
            TableEvent::RoundOver(result) => print_result(result),
        }
    }
}

fn format_cards(cards: &[Rank]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_result(result: &RoundResult) {
    match result.outcome {
        RoundOutcome::Tie => println!("\nTie Game!"),
        RoundOutcome::PlayerBust => {
            println!("\nPlayer busts with {}\nDealer wins!", result.player_score);
        }
        RoundOutcome::DealerBust => {
            println!("\nDealer busts with {}\nPlayer wins!", result.dealer_score);
        }
        RoundOutcome::PlayerBlackjack => println!("\nPlayer wins!\nBlackjack!"),
        RoundOutcome::DealerBlackjack => println!("\nDealer wins!\nBlackjack!"),
        RoundOutcome::PlayerWins => println!("\nPlayer Wins!"),
        RoundOutcome::DealerWins => println!("\nDealer Wins!"),
    }
    println!(
        "Player Hand: {} = {} | Dealer Hand: {} = {}",
        format_cards(&result.player_hand),
        result.player_score,
        format_cards(&result.dealer_hand),
        result.dealer_score
    );
}

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut game = Game::new(GameOptions::default(), seed);
    let mut console = Console;

    if let Err(err) = game.play(&mut console) {
        println!("Game error: {err}");
    }
}
