//! Tic-tac-toe with a computer opponent that never loses.
//!
//! [`ttt`] holds the board and its rules, [`min_max`] the exhaustive search the computer
//! uses, and [`session`] the turn and mode bookkeeping a front end needs.

pub mod error;
pub mod min_max;
pub mod session;
pub mod ttt;

pub use error::{PlaceError, SearchError, SessionError};
pub use session::{Mode, Session};
pub use ttt::{best_moves, find_best_move, find_best_move_for, score_moves, CellState, GameBoard, GameResult, Mark, Move};
