//! One game between two sides, either two humans or a human (X) against the computer (O).
//!
//! The session is the only place that remembers whose turn it is; the board and the
//! search are stateless between calls.

use derive_more::Display;
use tracing::{debug, info, instrument};

use crate::error::SessionError;
use crate::ttt::{find_best_move, GameBoard, GameResult, Mark, Move};

/// The mark the computer plays in [`Mode::Computer`].
pub const COMPUTER: Mark = Mark::O;

#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Human X against the computer as O.
    #[default]
    #[display("single player")]
    Computer,
    #[display("two player")]
    TwoPlayer,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Computer => Mode::TwoPlayer,
            Mode::TwoPlayer => Mode::Computer,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    board: GameBoard,
    to_move: Mark,
    mode: Mode,
}

impl Session {
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        info!(%mode, "starting session");
        Self {
            board: GameBoard::empty(),
            to_move: Mark::X,
            mode,
        }
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    /// Mark to move next. Once the game is decided this stays on the mark that decided it.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn result(&self) -> GameResult {
        self.board.evaluate()
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == Mode::Computer && self.to_move == COMPUTER && !self.result().is_terminal()
    }

    /// A human move for the mark to move.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn play(&mut self, index: Move) -> Result<GameResult, SessionError> {
        if self.is_computer_turn() {
            return Err(SessionError::ComputerTurn);
        }
        self.apply(index)
    }

    /// Lets the computer pick and play its move.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<(Move, GameResult), SessionError> {
        if !self.is_computer_turn() {
            return Err(SessionError::NotComputerTurn);
        }
        let index = find_best_move(&self.board)?;
        let result = self.apply(index)?;
        Ok((index, result))
    }

    pub fn restart(&mut self) {
        debug!("restarting session");
        self.board.reset();
        self.to_move = Mark::X;
    }

    /// Switches mode; the current game is abandoned.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.restart();
    }

    fn apply(&mut self, index: Move) -> Result<GameResult, SessionError> {
        self.board.place(index, self.to_move)?;
        let result = self.board.evaluate();
        if result.is_terminal() {
            info!(%result, "game over");
        } else {
            self.to_move = !self.to_move;
        }
        Ok(result)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
