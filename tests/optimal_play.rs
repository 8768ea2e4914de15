//! Whole-game properties of the search: the computer never loses and perfect play draws.

use ahash::HashSet;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rusty_tictactoe::ttt::WIN_LINES;
use rusty_tictactoe::{find_best_move, find_best_move_for, GameBoard, GameResult, Mark, Mode, Session};

/// Plays every possible X move at every X turn, with the computer answering as O.
fn explore_x_lines(board: GameBoard, games: &mut usize) {
    for x_move in board.empty_cells().collect::<Vec<_>>() {
        let mut board = board;
        board.place(x_move, Mark::X).unwrap();
        match board.evaluate() {
            GameResult::InProgress => {}
            result => {
                assert_ne!(result, GameResult::Win(Mark::X), "X won on\n{}", board);
                *games += 1;
                continue;
            }
        }

        let o_move = find_best_move(&board).unwrap();
        board.place(o_move, Mark::O).unwrap();
        match board.evaluate() {
            GameResult::InProgress => explore_x_lines(board, games),
            result => {
                assert_ne!(result, GameResult::Win(Mark::X));
                *games += 1;
            }
        }
    }
}

#[test]
fn computer_never_loses_to_any_x_line() {
    let mut games = 0;
    explore_x_lines(GameBoard::empty(), &mut games);
    assert!(games > 0);
}

fn self_play(mut board: GameBoard, mut to_move: Mark) -> GameResult {
    while !board.evaluate().is_terminal() {
        let index = find_best_move_for(&board, to_move).unwrap();
        board.place(index, to_move).unwrap();
        to_move = !to_move;
    }
    board.evaluate()
}

#[test]
fn perfect_play_draws() {
    assert_eq!(self_play(GameBoard::empty(), Mark::X), GameResult::Draw);
}

#[test]
fn perfect_play_draws_after_any_opening() {
    for opening in 0..9 {
        let mut board = GameBoard::empty();
        board.place(opening, Mark::X).unwrap();
        assert_eq!(self_play(board, Mark::O), GameResult::Draw, "opening {}", opening);
    }
}

fn collect_positions(board: GameBoard, to_move: Mark, seen: &mut HashSet<GameBoard>) {
    if !seen.insert(board) || board.evaluate().is_terminal() {
        return;
    }
    for index in board.empty_cells().collect::<Vec<_>>() {
        let mut next = board;
        next.place(index, to_move).unwrap();
        collect_positions(next, !to_move, seen);
    }
}

#[test]
fn reachable_positions_have_at_most_one_winner() {
    let mut seen = HashSet::default();
    collect_positions(GameBoard::empty(), Mark::X, &mut seen);
    assert_eq!(seen.len(), 5478);

    for board in &seen {
        let winners = WIN_LINES.iter()
            .filter_map(|&line| {
                let [a, b, c] = line.map(|index| board.cells()[index]);
                (a == b && b == c).then_some(a.mark()).flatten()
            })
            .collect::<HashSet<_>>();
        assert!(winners.len() <= 1, "two winners on\n{}", board);
        assert_eq!(board.evaluate().winner(), winners.into_iter().next());
        assert_eq!(board.evaluate(), board.evaluate());
    }
}

#[test]
fn random_humans_never_beat_the_computer() {
    let mut rng = StdRng::seed_from_u64(0x7ac7);
    for _ in 0..200 {
        let mut session = Session::new(Mode::Computer);
        while !session.result().is_terminal() {
            if session.is_computer_turn() {
                session.computer_move().unwrap();
            } else {
                let free = session.board().empty_cells().collect::<Vec<_>>();
                let index = *free.choose(&mut rng).unwrap();
                session.play(index).unwrap();
            }
        }
        assert_ne!(session.result(), GameResult::Win(Mark::X), "X won on\n{}", session.board());
    }
}
