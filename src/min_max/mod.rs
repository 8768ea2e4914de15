//! Exhaustive minimax over any game that can apply and take back moves in place.
//!
//! Terminal states score a fixed value from the maximizing side's point of view. The
//! depth of a terminal state is handed to [`Stats`] but never folded into its score, so
//! a quick win and a slow win look the same to the search.

pub mod stats;

use std::ops::Not;

use crate::min_max::stats::Stats;

#[derive(Eq, PartialEq, Hash)]
#[derive(Debug, Copy, Clone)]
pub enum Side {
    Min,
    Max,
}

impl Not for Side {
    type Output = Side;

    fn not(self) -> Side {
        match self {
            Side::Min => Side::Max,
            Side::Max => Side::Min,
        }
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub struct ScoredMove<M> {
    pub score: i32,
    pub min_max_move: M,
}

impl<M> ScoredMove<M> {
    pub fn new(score: i32, min_max_move: M) -> ScoredMove<M> {
        ScoredMove { score, min_max_move }
    }
}

pub trait Strategy<S, M> {
    /// Moves available in `state`, in the order the search tries them.
    fn possible_moves(&self, state: &S) -> Vec<M>;
    /// `Some(score)` for a finished game, `None` while play continues.
    fn terminal_score(&self, state: &S) -> Option<i32>;
    fn do_move(&self, state: &mut S, min_max_move: &M, side: Side);
    /// Must restore `state` exactly as it was before the matching `do_move`.
    fn undo_move(&self, state: &mut S, min_max_move: &M);
}

/// Scores every move available to [`Side::Max`] in `state`.
///
/// `state` is mutated while the tree is explored and is back to its original value when
/// this returns.
pub fn score_possible_moves<S, M, STRATEGY, STATS>(strategy: &STRATEGY, state: &mut S, stats: &mut STATS) -> Vec<ScoredMove<M>>
    where STRATEGY: Strategy<S, M>,
          STATS: Stats
{
    let pos_moves = strategy.possible_moves(state);
    pos_moves.into_iter().map(|m| {
        strategy.do_move(state, &m, Side::Max);
        let score = min_max_eval(strategy, state, Side::Min, 1, stats);
        strategy.undo_move(state, &m);
        ScoredMove::new(score, m)
    }).collect()
}

/// The highest scored move. Ties go to the move that was enumerated first.
pub fn best_move<S, M, STRATEGY, STATS>(strategy: &STRATEGY, state: &mut S, stats: &mut STATS) -> Option<ScoredMove<M>>
    where STRATEGY: Strategy<S, M>,
          STATS: Stats
{
    score_possible_moves(strategy, state, stats)
        .into_iter()
        .fold(None, |best, candidate| match best {
            Some(best) if candidate.score <= best.score => Some(best),
            _ => Some(candidate),
        })
}

fn min_max_eval<S, M, STRATEGY, STATS>(strategy: &STRATEGY, state: &mut S, side: Side, depth: u8, stats: &mut STATS) -> i32
    where STRATEGY: Strategy<S, M>,
          STATS: Stats
{
    stats.record_state_scored();
    if let Some(score) = strategy.terminal_score(state) {
        stats.record_terminal(depth);
        return score;
    }

    let mut best_score = match side {
        Side::Max => i32::MIN,
        Side::Min => i32::MAX,
    };
    for m in strategy.possible_moves(state) {
        strategy.do_move(state, &m, side);
        let score = min_max_eval(strategy, state, !side, depth + 1, stats);
        strategy.undo_move(state, &m);
        best_score = match side {
            Side::Max => best_score.max(score),
            Side::Min => best_score.min(score),
        };
    }
    best_score
}
