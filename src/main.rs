use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use std::io::{stdin, stdout, Stdin, Write};

use connect4_alphabeta::{search::*, *};

mod display;
use display::*;

fn prompt(stdin: &Stdin, message: &str) -> Result<String> {
    print!("{}", message);
    stdout().flush().expect("failed to flush to stdout!");
    let mut buffer = String::new();
    stdin.read_line(&mut buffer)?;
    Ok(buffer.trim().to_string())
}

fn computer_move(state: &GameState) -> Option<GameState> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}"));
    spinner.set_message("Computer is thinking...");
    spinner.enable_steady_tick(100);

    let mut searcher = Searcher::new();
    let result = searcher.search(state);
    spinner.finish_and_clear();

    println!(
        "Searched {} positions ({} cutoffs), value {}",
        result.stats.nodes, result.stats.cutoffs, result.value
    );
    result.next
}

fn play_game(stdin: &Stdin) -> Result<()> {
    let mut state = GameState::create();

    let first = if prompt(stdin, "Who plays first? 1-me /anything else-you: ")? == "1" {
        Player::Computer
    } else {
        Player::Human
    };
    state.set_first_player(first);

    // game loop
    while !state.is_terminal() {
        if state.is_human_turn() {
            display(&state).expect("Failed to draw board!");
            let input = prompt(stdin, "Enter the column for your next move: ")?;
            let column = match input.parse::<usize>() {
                Ok(column) => column,
                Err(_) => {
                    println!("Invalid number: {}", input);
                    continue;
                }
            };
            match state.play_column(column) {
                Ok(next) => state = next,
                // try the move again
                Err(err) => println!("{}", err),
            }
        } else {
            match computer_move(&state) {
                Some(next) => state = next,
                None => break,
            }
        }
    }

    display(&state).expect("Failed to draw board!");
    Ok(())
}

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    loop {
        play_game(&stdin)?;

        loop {
            let answer = prompt(&stdin, "Play again? y/n: ")?;
            match answer.to_lowercase().chars().next() {
                Some(_letter @ 'y') => break,
                Some(_letter @ 'n') => return Ok(()),
                _ => println!("Unknown answer given"),
            }
        }
    }
}
