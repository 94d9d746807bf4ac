//! Minimax with Alpha-Beta pruning implementation.

use std::cmp;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use crate::board::Board;
use crate::coretypes::{Player, PlyKind, Score};
use crate::eval::EvalFn;
use crate::search::{SearchControl, SearchResult};

/// Base alpha_beta call. The player to move at the root is the maxing player.
/// It returns the best move and score for the board in the search tree.
///
/// Pruning never changes the chosen root move or score versus [`minimax`] at
/// the same depth: both explore children in generation order and update the
/// best move only on strict improvement, and a pruned subtree is one that
/// was already proven unable to improve on the current best.
///
/// [`minimax`]: crate::search::minimax
pub fn alpha_beta(board: Board, ply: PlyKind, eval: EvalFn) -> SearchResult {
    let mut control = SearchControl::unlimited(Arc::new(AtomicBool::new(false)), ply);
    alpha_beta_with_control(board, ply, eval, &mut control)
}

/// Properties of Alpha-Beta pruning.
/// * The maxing player can only update alpha from its children.
/// * The minning player can only update beta from its children.
/// * Alpha and Beta can only be inherited from their ancestors, and are otherwise Alpha=-Inf, Beta=Inf.
/// * Alpha is usually less than Beta. When they are equal or cross, a cut off occurs.

/// Full alpha-beta search with cooperative cancellation, the per-iteration
/// workhorse of iterative deepening. If the control reports expiry the
/// search unwinds immediately and the result comes back flagged `stopped`;
/// the caller keeps its previous completed answer instead.
pub(crate) fn alpha_beta_with_control(
    board: Board,
    ply: PlyKind,
    eval: EvalFn,
    control: &mut SearchControl,
) -> SearchResult {
    assert_ne!(ply, 0);

    let instant = Instant::now();
    let root_player = board.to_move();

    if board.is_terminal() {
        let mut result = SearchResult::forfeit(root_player, instant);
        result.nodes = control.nodes;
        return result;
    }

    control.visit();
    let legal_moves = board.get_legal_moves();

    // The root cannot prune its own children: alpha starts at -Inf and beta
    // stays at +Inf, so no sibling bound exists to cut against.
    let mut alpha = Score::MIN;
    let beta = Score::MAX;
    let mut best_move = legal_moves[0];

    for legal_move in legal_moves {
        let successor = board.make_move(legal_move);
        let move_score =
            alpha_beta_impl(&successor, root_player, ply - 1, eval, alpha, beta, control);
        if control.stopped {
            break;
        }

        if move_score > alpha {
            alpha = move_score;
            best_move = legal_move;
        }
    }

    SearchResult {
        best_move,
        score: alpha,
        player: root_player,
        depth: ply,
        nodes: control.nodes,
        elapsed: instant.elapsed(),
        stopped: control.stopped,
    }
}

fn alpha_beta_impl(
    board: &Board,
    max_player: Player,
    ply: PlyKind,
    eval: EvalFn,
    alpha: Score,
    beta: Score,
    control: &mut SearchControl,
) -> Score {
    control.visit();
    if control.should_stop() {
        // Unwinding, any value returned from here is discarded.
        return Score(0);
    }

    // Stop at terminal node: boxed-in player or last depth.
    if board.is_terminal() {
        return board.utility(max_player);
    }
    if ply == 0 {
        return eval(board, max_player);
    }

    let legal_moves = board.get_legal_moves();

    if board.to_move() == max_player {
        let mut best_score = Score::MIN;
        let mut alpha = alpha;

        for legal_move in legal_moves {
            let successor = board.make_move(legal_move);
            let move_score =
                alpha_beta_impl(&successor, max_player, ply - 1, eval, alpha, beta, control);
            if control.stopped {
                break;
            }

            best_score = cmp::max(best_score, move_score);
            alpha = cmp::max(alpha, best_score);
            if alpha >= beta {
                // Beta cutoff
                return best_score;
            }
        }
        best_score
    } else {
        let mut best_score = Score::MAX;
        let mut beta = beta;

        for legal_move in legal_moves {
            let successor = board.make_move(legal_move);
            let move_score =
                alpha_beta_impl(&successor, max_player, ply - 1, eval, alpha, beta, control);
            if control.stopped {
                break;
            }

            best_score = cmp::min(best_score, move_score);
            beta = cmp::min(beta, best_score);
            if alpha >= beta {
                // Alpha cutoff
                return best_score;
            }
        }
        best_score
    }
}
