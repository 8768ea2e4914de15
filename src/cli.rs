//! Command line options and the commands typed during a game.

use clap::{Parser, ValueEnum};
use derive_more::Display;
use rusty_tictactoe::{Mode, Move};

/// Play tic-tac-toe in the terminal, against a friend or an unbeatable computer
#[derive(Parser, Debug)]
#[command(name = "rusty-tictactoe")]
#[command(version)]
pub struct Cli {
    /// Who plays O
    #[arg(short, long, value_enum, default_value_t = ModeArg::Computer)]
    pub mode: ModeArg,

    /// Pause before the computer's move, in milliseconds
    #[arg(long, default_value = "500")]
    pub computer_delay_ms: u64,
}

#[derive(ValueEnum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ModeArg {
    /// The computer plays O
    Computer,
    /// A second human plays O
    TwoPlayer,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Computer => Mode::Computer,
            ModeArg::TwoPlayer => Mode::TwoPlayer,
        }
    }
}

pub const HELP: &str = "\
1-9         place your mark on that cell
r, restart  start a new game
m, mode     switch between single and two player (restarts)
h, hint     show how every free cell scores for the side to move
?, help     show this help
q, quit     leave";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Input {
    Place(Move),
    Restart,
    ToggleMode,
    Hint,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Unknown command {:?}, type ? for help", _0)]
pub struct InputError(String);

impl std::error::Error for InputError {}

impl Input {
    pub fn parse(line: &str) -> Result<Input, InputError> {
        let command = line.trim().to_lowercase();
        let input = match command.as_str() {
            "r" | "restart" => Input::Restart,
            "m" | "mode" => Input::ToggleMode,
            "h" | "hint" => Input::Hint,
            "?" | "help" => Input::Help,
            "q" | "quit" => Input::Quit,
            other => match other.parse::<Move>() {
                Ok(cell @ 1..=9) => Input::Place(cell - 1),
                _ => return Err(InputError(line.trim().to_string())),
            },
        };
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Input, InputError, ModeArg};

    #[test]
    fn cells_are_one_based() {
        assert_eq!(Input::parse("1"), Ok(Input::Place(0)));
        assert_eq!(Input::parse(" 9\n"), Ok(Input::Place(8)));
        assert_eq!(Input::parse("0"), Err(InputError("0".to_string())));
        assert_eq!(Input::parse("10"), Err(InputError("10".to_string())));
    }

    #[test]
    fn commands() {
        assert_eq!(Input::parse("R"), Ok(Input::Restart));
        assert_eq!(Input::parse("mode"), Ok(Input::ToggleMode));
        assert_eq!(Input::parse("hint"), Ok(Input::Hint));
        assert_eq!(Input::parse("?"), Ok(Input::Help));
        assert_eq!(Input::parse("quit"), Ok(Input::Quit));
        assert!(Input::parse("castle").is_err());
    }

    #[test]
    fn options() {
        let cli = Cli::parse_from(["rusty-tictactoe"]);
        assert_eq!(cli.mode, ModeArg::Computer);
        assert_eq!(cli.computer_delay_ms, 500);

        let cli = Cli::parse_from(["rusty-tictactoe", "--mode", "two-player", "--computer-delay-ms", "0"]);
        assert_eq!(cli.mode, ModeArg::TwoPlayer);
        assert_eq!(cli.computer_delay_ms, 0);
    }
}
