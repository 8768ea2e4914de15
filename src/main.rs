mod cli;

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use itertools::Itertools;
use rusty_tictactoe::{score_moves, GameResult, Session};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Input, HELP};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut session = Session::new(cli.mode.into());
    let delay = Duration::from_millis(cli.computer_delay_ms);
    let mut lines = io::stdin().lock().lines();

    println!("{}\n", HELP);
    print_status(&session);
    loop {
        if session.is_computer_turn() {
            thread::sleep(delay);
            let (index, _) = session.computer_move()?;
            println!("Computer plays {}", index + 1);
            print_status(&session);
            continue;
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        match Input::parse(&line?) {
            Ok(Input::Place(index)) => match session.play(index) {
                Ok(_) => print_status(&session),
                Err(err) => {
                    debug!(index, %err, "move ignored");
                    println!("{}", err);
                }
            },
            Ok(Input::Restart) => {
                session.restart();
                print_status(&session);
            }
            Ok(Input::ToggleMode) => {
                session.set_mode(session.mode().toggled());
                println!("Switched to {} mode", session.mode());
                print_status(&session);
            }
            Ok(Input::Hint) => print_hint(&session),
            Ok(Input::Help) => println!("{}", HELP),
            Ok(Input::Quit) => break,
            Err(err) => println!("{}", err),
        }
    }
    info!("bye");
    Ok(())
}

fn print_status(session: &Session) {
    println!("\n{}\n", session.board());
    match session.result() {
        GameResult::InProgress => println!("Player {}'s Turn", session.to_move()),
        GameResult::Win(mark) => println!("Player {} wins! Type r to play again.", mark),
        GameResult::Draw => println!("It's a draw! Type r to play again."),
    }
}

fn print_hint(session: &Session) {
    let scores = score_moves(session.board(), session.to_move());
    if scores.iter().all(Option::is_none) {
        println!("Nothing left to play, type r to restart");
        return;
    }
    println!("Scores for {} (1 win, 0 draw, -1 loss):", session.to_move());
    print_3_by_3(&scores.map(|score| score.map_or_else(|| ".".to_string(), |score| score.to_string())));
}

fn print_3_by_3(cells: &[String; 9]) {
    for row in cells.chunks(3) {
        println!("{}", row.iter().map(|cell| format!("{:>3}", cell)).join(","));
    }
}
