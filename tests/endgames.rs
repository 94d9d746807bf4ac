//! Endgame positions with a known outcome.
//!
//! Each position is given in board notation. The search must find the
//! winning move (or recognize the loss) within the listed depth.

use std::str::FromStr;

use isolation_engine::board::Board;
use isolation_engine::coretypes::{Move, PlyKind, Score};
use isolation_engine::eval::improved_score;
use isolation_engine::search::{alpha_beta, minimax, Termination};
use isolation_engine::Player;

/// Assert that searching `notation` to `ply` with both fixed-depth searches
/// produces `expected_move` with a proven win for the root player.
fn win_tester(notation: &str, ply: PlyKind, expected_move: &str) {
    let board = Board::from_str(notation).unwrap();
    let expected = Move::from_str(expected_move).unwrap();

    for result in [
        minimax(board, ply, improved_score),
        alpha_beta(board, ply, improved_score),
    ] {
        assert_eq!(result.best_move, expected, "position: {}", notation);
        assert_eq!(result.score, Score::WIN, "position: {}", notation);
        assert!(result.is_proven_win());
        assert_eq!(result.termination(), Termination::Completed);
    }
}

#[test]
fn win_in_two_adjacent_corridor() {
    // P1 slides next to P2, leaving it with no reply.
    win_tester("1.2 1", 2, "a1b1");
}

#[test]
fn win_by_cutting_off_in_corridor() {
    // A1 B1 C1(p1) D1 E1(p2). Sliding onto d1 boxes p2 in immediately;
    // deeper play shows every p1 move wins, the direct cut is found first.
    win_tester("..1.2 1", 2, "c1d1");
    win_tester("..1.2 1", 4, "c1d1");
}

#[test]
fn win_for_second_player() {
    // P2 to move mirrors the corridor win.
    win_tester("2.1 2", 2, "a1b1");
}

#[test]
fn boxed_in_player_loses() {
    // P1 is walled in on every adjacent cell.
    let board = Board::from_str("xxx./x1x./xxx./...2 1").unwrap();
    assert!(board.is_terminal());
    assert!(board.get_legal_moves().is_empty());
    assert_eq!(board.utility(Player::P1), Score::LOSS);
    assert_eq!(board.utility(Player::P2), Score::WIN);
}

#[test]
fn boxed_in_player_forfeits_at_root() {
    let board = Board::from_str("1x2 1").unwrap();

    for result in [
        minimax(board, 3, improved_score),
        alpha_beta(board, 3, improved_score),
    ] {
        assert_eq!(result.termination(), Termination::Forfeit);
        assert!(result.best_move.is_forfeit());
        assert_eq!(result.score, Score::LOSS);
    }
}

#[test]
fn terminal_utility_is_from_given_perspective() {
    // P2 to move with no moves left loses, regardless of who asks.
    let board = Board::from_str("x1x/x2x/xxx 2").unwrap();
    assert!(board.is_terminal());
    assert_eq!(board.utility(Player::P2), Score::LOSS);
    assert_eq!(board.utility(Player::P1), Score::WIN);
}

#[test]
fn losing_position_is_scored_as_loss() {
    // Both players are sealed in one-cell corridors; p1 runs out first.
    let board = Board::from_str("1.x.2 1").unwrap();
    let result = alpha_beta(board, 3, improved_score);
    assert_eq!(result.score, Score::LOSS);
    assert!(!result.best_move.is_forfeit());
}
