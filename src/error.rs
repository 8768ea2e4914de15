//! Errors raised by the board, the search and the session.

use derive_more::{Display, Error, From};

use crate::ttt::{GameResult, Move};

/// A move that cannot be placed on the board.
///
/// Callers are expected to ignore these (a click on a taken cell, a click after the game
/// ended) rather than abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PlaceError {
    /// The index is not on the board.
    #[display("Cell {} is not on the board", _0)]
    OutOfBounds(Move),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Move),

    /// The game has already been decided.
    #[display("Game is already over ({})", _0)]
    GameOver(GameResult),
}

impl std::error::Error for PlaceError {}

/// The search was asked for a move on a board that has none.
///
/// This only happens when the caller did not check the result of the board first, so it
/// is a sequencing bug in the caller and should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchError {
    #[display("No legal move left, game is finished ({})", _0)]
    NoLegalMove(GameResult),
}

impl std::error::Error for SearchError {}

/// Errors from driving a [`Session`](crate::session::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    #[display("{}", _0)]
    #[from]
    Place(PlaceError),

    #[display("{}", _0)]
    #[from]
    Search(SearchError),

    /// A human move arrived while the computer is to move.
    #[display("Wait for the computer to move")]
    ComputerTurn,

    /// The computer was asked to move while a human is to move.
    #[display("It is not the computer's turn")]
    NotComputerTurn,
}
