//! Cross-checks between the search implementations.
//!
//! Alpha-beta must agree with plain minimax on both the chosen move and its
//! score while never visiting more nodes, and iterative deepening with a
//! generous budget must agree with a fixed-depth search of the same depth.
//! Positions come from seeded random playouts so runs are reproducible.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use isolation_engine::board::Board;
use isolation_engine::eval::{center_score, improved_score, open_move_score};
use isolation_engine::search::{alpha_beta, minimax, search, Termination};
use isolation_engine::timeman::Mode;
use isolation_engine::Game;

/// Play `plies` random legal moves from an empty board, stopping early if
/// the game ends.
fn random_board(rng: &mut StdRng, width: u8, height: u8, plies: usize) -> Board {
    let mut board = Board::new(width, height).unwrap();
    for _ in 0..plies {
        let legal_moves = board.get_legal_moves();
        if legal_moves.is_empty() {
            break;
        }
        let choice = legal_moves[rng.gen_range(0..legal_moves.len())];
        board = board.make_move(choice);
    }
    board
}

#[test]
fn alpha_beta_agrees_with_minimax() {
    let mut rng = StdRng::seed_from_u64(7);

    for playout in 0..12 {
        let board = random_board(&mut rng, 5, 4, 2 + playout % 7);

        for ply in 1..=3 {
            let mm = minimax(board, ply, improved_score);
            let ab = alpha_beta(board, ply, improved_score);

            assert_eq!(ab.best_move, mm.best_move, "ply {}:\n{}", ply, board);
            assert_eq!(ab.score, mm.score, "ply {}:\n{}", ply, board);
            assert!(ab.nodes <= mm.nodes, "ply {}:\n{}", ply, board);
        }
    }
}

#[test]
fn alpha_beta_agreement_holds_for_every_heuristic() {
    let mut rng = StdRng::seed_from_u64(20);
    let board = random_board(&mut rng, 5, 4, 4);

    for eval in [open_move_score, improved_score, center_score] {
        let mm = minimax(board, 3, eval);
        let ab = alpha_beta(board, 3, eval);
        assert_eq!(ab.best_move, mm.best_move);
        assert_eq!(ab.score, mm.score);
    }
}

#[test]
fn alpha_beta_prunes_from_depth_two() {
    let board = Board::new(5, 4).unwrap();
    let mm = minimax(board, 3, improved_score);
    let ab = alpha_beta(board, 3, improved_score);
    assert!(ab.nodes < mm.nodes);
}

#[test]
fn deepening_with_a_generous_budget_matches_fixed_depth() {
    let mut rng = StdRng::seed_from_u64(33);

    for playout in 0..6 {
        let board = random_board(&mut rng, 4, 4, 3 + playout);
        if board.is_terminal() {
            continue;
        }

        let mode = Mode::depth(4, None);
        let deepened = search(board, mode, improved_score, None);
        let fixed = alpha_beta(board, deepened.depth, improved_score);

        assert_eq!(deepened.best_move, fixed.best_move, "{}", board);
        assert_eq!(deepened.score, fixed.score, "{}", board);
        assert_eq!(deepened.termination(), Termination::Completed);
    }
}

#[test]
fn expired_budget_still_yields_a_legal_move() {
    let mut rng = StdRng::seed_from_u64(99);

    for playout in 0..6 {
        let board = random_board(&mut rng, 4, 4, playout);
        if board.is_terminal() {
            continue;
        }

        // The deadline passed long before the search began.
        let start_time = Instant::now() - Duration::from_secs(5);
        let mode = Mode::movetime(Duration::from_millis(1), None);
        let result = search(board, mode, improved_score, Some(start_time));

        assert_eq!(result.depth, 1, "{}", board);
        assert!(board.is_legal_move(result.best_move), "{}", board);
        assert_eq!(result.termination(), Termination::Completed);
    }
}

#[test]
fn search_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(4);
    let board = random_board(&mut rng, 5, 4, 5);

    let first = alpha_beta(board, 4, improved_score);
    let second = alpha_beta(board, 4, improved_score);
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.score, second.score);
    assert_eq!(first.nodes, second.nodes);
}

#[test]
fn random_playouts_keep_board_and_game_in_sync() {
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..4 {
        let mut board = Board::new(4, 4).unwrap();
        let mut game = Game::from(board);

        while !board.is_terminal() {
            let legal_moves = board.get_legal_moves();
            let choice = legal_moves[rng.gen_range(0..legal_moves.len())];
            board = board.make_move(choice);
            game.make_move(choice).unwrap();
        }

        assert!(game.is_over());
        assert_eq!(game.board.to_move(), board.to_move());
        assert_eq!(game.board.open_cells(), board.open_cells());
    }
}

#[test]
fn terminal_is_equivalent_to_having_no_legal_moves() {
    let mut rng = StdRng::seed_from_u64(50);

    for plies in 0..14 {
        let board = random_board(&mut rng, 4, 3, plies);
        assert_eq!(board.is_terminal(), board.get_legal_moves().is_empty());
    }
}
