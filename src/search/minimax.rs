//! Minimax implementation.

use std::cmp;
use std::time::Instant;

use crate::board::Board;
use crate::coretypes::{Move, Player, PlyKind, Score};
use crate::eval::EvalFn;
use crate::search::SearchResult;

/// Base minimax call. The player to move at the root is the maxing player.
/// It returns the best move and score for the board in the search tree.
///
/// If the root has no legal moves the forfeit sentinel is returned and the
/// evaluator is never called.
pub fn minimax(board: Board, ply: PlyKind, eval: EvalFn) -> SearchResult {
    assert_ne!(ply, 0);

    let instant = Instant::now();
    let root_player = board.to_move();

    if board.is_terminal() {
        return SearchResult::forfeit(root_player, instant);
    }

    let mut nodes = 0;
    let (score, best_move) = minimax_root(&board, ply, eval, &mut nodes);

    SearchResult {
        best_move,
        score,
        player: root_player,
        depth: ply,
        nodes,
        elapsed: instant.elapsed(),
        stopped: false,
    }
}

/// Minimax root is almost the same as minimax impl, except it links a score
/// to its move. It can only operate on boards that are not terminal.
///
/// The root is always a MAX layer, and the best move is updated only on a
/// strict improvement, so ties break to the first move in generation order.
fn minimax_root(board: &Board, ply: PlyKind, eval: EvalFn, nodes: &mut u64) -> (Score, Move) {
    *nodes += 1;
    let legal_moves = board.get_legal_moves();
    debug_assert_ne!(ply, 0);
    debug_assert!(!legal_moves.is_empty());

    let max_player = board.to_move();
    let mut best_move = legal_moves[0];
    let mut best_score = Score::MIN;

    for legal_move in legal_moves {
        let successor = board.make_move(legal_move);
        let move_score = minimax_impl(&successor, max_player, ply - 1, eval, nodes);

        if move_score > best_score {
            best_score = move_score;
            best_move = legal_move;
        }
    }

    (best_score, best_move)
}

/// Recursively alternating MAX and MIN layers. The layer kind falls out of
/// whose turn it is on the board rather than being threaded as a flag.
fn minimax_impl(
    board: &Board,
    max_player: Player,
    ply: PlyKind,
    eval: EvalFn,
    nodes: &mut u64,
) -> Score {
    *nodes += 1;

    // Terminal boards are proven results regardless of remaining depth.
    if board.is_terminal() {
        return board.utility(max_player);
    }
    if ply == 0 {
        return eval(board, max_player);
    }

    let legal_moves = board.get_legal_moves();
    let maxing = board.to_move() == max_player;
    let mut best_score = if maxing { Score::MIN } else { Score::MAX };

    for legal_move in legal_moves {
        let successor = board.make_move(legal_move);
        let move_score = minimax_impl(&successor, max_player, ply - 1, eval, nodes);

        best_score = if maxing {
            cmp::max(best_score, move_score)
        } else {
            cmp::min(best_score, move_score)
        };
    }

    best_score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::{Coord, Move};
    use crate::eval::improved_score;
    use crate::notation::Notation;
    use crate::search::Termination;

    #[test]
    #[should_panic]
    fn rejects_zero_ply() {
        let board = Board::parse_notation("1.2 1").unwrap();
        minimax(board, 0, improved_score);
    }

    #[test]
    fn forfeit_at_root_without_calling_eval() {
        fn panicking_eval(_: &Board, _: Player) -> Score {
            panic!("evaluator must not run for a forfeited root");
        }

        // P1 boxed into the corner with every neighbor blocked.
        let board = Board::parse_notation("1x/xx 1").unwrap();
        let result = minimax(board, 3, panicking_eval);

        assert_eq!(result.best_move, Move::Forfeit);
        assert_eq!(result.score, Score::LOSS);
        assert_eq!(result.termination(), Termination::Forfeit);
    }

    #[test]
    fn finds_forced_win_on_line_board() {
        // P1 slides to the middle cell, after which P2 cannot move.
        let board = Board::parse_notation("1.2 1").unwrap();
        let result = minimax(board, 2, improved_score);

        assert_eq!(
            result.best_move,
            Move::Slide {
                from: Coord::new(0, 0),
                to: Coord::new(1, 0),
            }
        );
        assert!(result.score.is_win());
    }

    #[test]
    fn depth_one_picks_highest_eval() {
        let board = Board::parse_notation("1../.../..2 1").unwrap();
        let result = minimax(board, 1, improved_score);

        // Depth 1 scores each successor with the evaluator directly.
        let by_hand = board
            .get_legal_moves()
            .into_iter()
            .map(|mv| improved_score(&board.make_move(mv), Player::P1))
            .max()
            .unwrap();
        assert_eq!(result.score, by_hand);
    }
}
