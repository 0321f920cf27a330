use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_alphabeta::{GameState, Mark, Outcome, WIDTH};

/// Draws the board with column labels underneath, and a line about the result once the game ends
pub fn display(state: &GameState) -> Result<()> {
    let mut stdout = stdout();

    let separator = " ---".repeat(WIDTH) + "\n";
    stdout.queue(PrintStyledContent(style("\n")))?;
    for row in state.board().rows() {
        stdout
            .queue(PrintStyledContent(style(separator.clone())))?
            .queue(PrintStyledContent(style("|")))?;
        for mark in row.iter() {
            let cell = match mark {
                Mark::Computer => style(" X ").attribute(Attribute::Bold).with(Color::Red),
                Mark::Human => style(" O ").attribute(Attribute::Bold).with(Color::Blue),
                Mark::Empty => style("   "),
            };
            stdout
                .queue(PrintStyledContent(cell))?
                .queue(PrintStyledContent(style("|")))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    let labels: String = (0..WIDTH).map(|column| format!("  {} ", column)).collect();
    stdout
        .queue(PrintStyledContent(style(separator)))?
        .queue(PrintStyledContent(style(labels + "\n\n")))?;
    stdout.flush()?;

    match state.outcome() {
        Some(Outcome::ComputerWin) => println!("Ha ha ha I won!"),
        Some(Outcome::HumanWin) => println!("You did it!"),
        Some(Outcome::Tie) => println!("It's a TIE"),
        None => {}
    }
    Ok(())
}
