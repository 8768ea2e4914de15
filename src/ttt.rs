//! The 3x3 board, its rules, and the search that plays it.

use std::fmt;
use std::ops::Not;

use derive_more::Display;
use itertools::Itertools;
use strum_macros::EnumIter;
use tracing::{debug, instrument, trace};

use crate::error::{PlaceError, SearchError};
use crate::min_max;
use crate::min_max::stats::{NullStats, SimpleStats};
use crate::min_max::{ScoredMove, Side, Strategy as _};

/// Index of a cell, 0-8 in row-major order.
pub type Move = usize;

pub const CELL_COUNT: usize = 9;

/// Rows, then columns, then the two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Display, EnumIter, Copy, Clone, Hash, Eq, PartialEq)]
pub enum Mark {
    X,
    O,
}

impl Not for Mark {
    type Output = Mark;

    fn not(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

#[derive(Debug, Default, Copy, Clone, Hash, Eq, PartialEq)]
pub enum CellState {
    #[default]
    Empty,
    X,
    O,
}

impl CellState {
    pub fn mark(self) -> Option<Mark> {
        match self {
            CellState::Empty => None,
            CellState::X => Some(Mark::X),
            CellState::O => Some(Mark::O),
        }
    }
}

impl From<Mark> for CellState {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => CellState::X,
            Mark::O => CellState::O,
        }
    }
}

/// Outcome of a board, always derived from the cells.
#[derive(Debug, Display, Copy, Clone, Hash, Eq, PartialEq)]
pub enum GameResult {
    #[display("in progress")]
    InProgress,
    #[display("{} wins", _0)]
    Win(Mark),
    #[display("draw")]
    Draw,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            GameResult::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct GameBoard {
    cells: [CellState; CELL_COUNT],
}

impl GameBoard {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(cells: [CellState; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[CellState; CELL_COUNT] {
        &self.cells
    }

    /// # Panics
    ///
    /// If `index` is not in `0..9`.
    pub fn is_occupied(&self, index: Move) -> bool {
        self.cells[index] != CellState::Empty
    }

    pub fn empty_cells(&self) -> impl Iterator<Item=Move> + '_ {
        self.cells.iter().positions(|cell| *cell == CellState::Empty)
    }

    /// Puts `mark` on the cell at `index`.
    ///
    /// Rejects indices off the board, boards that are already decided, and occupied cells,
    /// checked in that order. The board is untouched on error.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&mut self, index: Move, mark: Mark) -> Result<(), PlaceError> {
        if index >= CELL_COUNT {
            return Err(PlaceError::OutOfBounds(index));
        }
        let result = self.evaluate();
        if result.is_terminal() {
            return Err(PlaceError::GameOver(result));
        }
        if self.is_occupied(index) {
            return Err(PlaceError::CellOccupied(index));
        }
        self.cells[index] = mark.into();
        trace!(index, %mark, "placed mark");
        Ok(())
    }

    /// Takes back whatever is on the cell at `index`.
    ///
    /// # Panics
    ///
    /// If `index` is not in `0..9`.
    pub fn clear(&mut self, index: Move) {
        self.cells[index] = CellState::Empty;
    }

    /// The first line, in [`WIN_LINES`] order, holding three equal marks.
    pub fn winning_line(&self) -> Option<&'static [usize; 3]> {
        WIN_LINES.iter().find(|indices| {
            self.cells[indices[0]] == self.cells[indices[1]] && self.cells[indices[1]] == self.cells[indices[2]] && self.cells[indices[0]] != CellState::Empty
        })
    }

    pub fn evaluate(&self) -> GameResult {
        match self.winning_line().and_then(|indices| self.cells[indices[0]].mark()) {
            Some(mark) => GameResult::Win(mark),
            None => {
                if self.cells.iter().any(|c| c == &CellState::Empty) {
                    GameResult::InProgress
                } else {
                    GameResult::Draw
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.cells = [CellState::Empty; CELL_COUNT];
    }
}

/// Three rows separated by rules; empty cells show their 1-based number.
impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.cells.chunks(3).enumerate().map(|(row, cells)| {
            cells.iter().enumerate().map(|(col, cell)| match cell.mark() {
                Some(mark) => mark.to_string(),
                None => (row * 3 + col + 1).to_string(),
            }).join(" | ")
        }).join("\n--+---+--\n");
        write!(f, "{}", rows)
    }
}

/// Minimax strategy with `maximizer` as the side the search plays for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Strategy {
    maximizer: Mark,
}

impl Strategy {
    pub fn new(maximizer: Mark) -> Self {
        Self { maximizer }
    }

    pub fn maximizer(&self) -> Mark {
        self.maximizer
    }

    fn mark_for(&self, side: Side) -> Mark {
        match side {
            Side::Max => self.maximizer,
            Side::Min => !self.maximizer,
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::new(Mark::O)
    }
}

/// +1 when `maximizer` has won, -1 when its opponent has, 0 for a draw, whatever the depth.
pub fn default_score(result: GameResult, maximizer: Mark) -> Option<i32> {
    match result {
        GameResult::InProgress => None,
        GameResult::Win(mark) if mark == maximizer => Some(1),
        GameResult::Win(_) => Some(-1),
        GameResult::Draw => Some(0),
    }
}

impl min_max::Strategy<GameBoard, Move> for Strategy {
    fn possible_moves(&self, state: &GameBoard) -> Vec<Move> {
        state.empty_cells().collect()
    }

    fn terminal_score(&self, state: &GameBoard) -> Option<i32> {
        default_score(state.evaluate(), self.maximizer)
    }

    fn do_move(&self, state: &mut GameBoard, index: &Move, side: Side) {
        debug_assert!(!state.is_occupied(*index));
        state.cells[*index] = self.mark_for(side).into();
    }

    fn undo_move(&self, state: &mut GameBoard, index: &Move) {
        state.clear(*index);
    }
}

/// The computer's move: the best cell for O.
pub fn find_best_move(board: &GameBoard) -> Result<Move, SearchError> {
    find_best_move_for(board, Mark::O)
}

/// The best cell for `mark`, the lowest index among equally scored cells.
///
/// Fails on a board that is already decided or full.
#[instrument(level = "debug", skip(board))]
pub fn find_best_move_for(board: &GameBoard, mark: Mark) -> Result<Move, SearchError> {
    let result = board.evaluate();
    if result.is_terminal() {
        return Err(SearchError::NoLegalMove(result));
    }

    let strategy = Strategy::new(mark);
    let mut scratch = *board;
    let mut stats = SimpleStats::default();
    let best = min_max::best_move(&strategy, &mut scratch, &mut stats).ok_or(SearchError::NoLegalMove(result))?;
    debug_assert_eq!(&scratch, board, "search left a mark behind");

    debug!(
        index = best.min_max_move,
        score = best.score,
        states = stats.state_scored_count,
        terminals = stats.terminal_count,
        max_depth = stats.max_depth,
        "found best move"
    );
    Ok(best.min_max_move)
}

/// Score of every empty cell for `mark`; `None` for occupied cells and on a decided board.
#[instrument(level = "debug", skip(board))]
pub fn score_moves(board: &GameBoard, mark: Mark) -> [Option<i32>; CELL_COUNT] {
    let mut scores = [None; CELL_COUNT];
    if board.evaluate().is_terminal() {
        return scores;
    }
    let mut scratch = *board;
    for m in min_max::score_possible_moves(&Strategy::new(mark), &mut scratch, &mut NullStats) {
        scores[m.min_max_move] = Some(m.score);
    }
    scores
}

/// Every cell sharing the top score for `mark`, in ascending order.
pub fn best_moves(board: &GameBoard, mark: Mark) -> Vec<Move> {
    if board.evaluate().is_terminal() {
        return Vec::new();
    }
    let mut scratch = *board;
    min_max::score_possible_moves(&Strategy::new(mark), &mut scratch, &mut NullStats)
        .into_iter()
        .max_set_by_key(|m: &ScoredMove<Move>| m.score)
        .into_iter()
        .map(|m| m.min_max_move)
        .collect()
}
