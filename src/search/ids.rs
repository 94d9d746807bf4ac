//! Iterative Deepening Search.
//!
//! The engine's anytime decision procedure: alpha-beta at depth 1, then 2,
//! and so on, keeping the answer of the deepest fully completed depth. The
//! clock is consulted before starting each deeper iteration and periodically
//! inside one, so an aborted iteration costs a bounded overrun and its
//! partial result is discarded.

use std::cmp;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::board::Board;
use crate::coretypes::{PlyKind, MAX_DEPTH};
use crate::eval::EvalFn;
use crate::search::{alpha_beta_with_control, SearchControl, SearchResult};
use crate::timeman::Mode;

/// Searches the game tree with iterative deepening until the mode says stop,
/// the stopper flag is raised, or the root value is a proven win or loss.
///
/// Guarantees:
/// * Depth 1 is always completed, even on an expired clock, so the returned
///   move comes from a fully searched depth whenever one legal move exists.
/// * The returned move is legal for `board`, or is the forfeit sentinel when
///   the root has no legal moves.
/// * `board` is passed by value and never mutated for the caller.
pub fn ids(
    board: Board,
    mode: Mode,
    eval: EvalFn,
    start_time: Instant,
    stopper: Arc<AtomicBool>,
    debug: bool,
) -> SearchResult {
    let root_player = board.to_move();

    if board.is_terminal() {
        return SearchResult::forfeit(root_player, start_time);
    }

    // A game from this board lasts at most one ply per open cell plus the
    // two frontier plies, so deeper searches cannot see anything new.
    let depth_cap = cmp::min(MAX_DEPTH as usize, board.open_cells() + 2) as PlyKind;

    let mut nodes = 0;

    // Depth 1 ignores the clock so a completed answer always exists. Only an
    // externally raised stopper can abort it, in which case the first legal
    // move stands in and the result reports no completed depth.
    let mut control = SearchControl::unlimited(Arc::clone(&stopper), 1);
    let mut best = alpha_beta_with_control(board, 1, eval, &mut control);
    nodes += control.nodes;

    if best.stopped {
        best.best_move = board.get_legal_moves()[0];
        best.depth = 0;
        best.nodes = nodes;
        best.elapsed = start_time.elapsed();
        return best;
    }

    for ply in 2..=depth_cap {
        // A proven result at the root cannot change by searching deeper.
        if best.score.is_terminal() {
            break;
        }
        if stopper.load(Ordering::Relaxed) || mode.stop(ply, start_time) {
            break;
        }

        let mut control = SearchControl::new(mode, start_time, Arc::clone(&stopper), ply);
        let search_result = alpha_beta_with_control(board, ply, eval, &mut control);
        nodes += control.nodes;

        if search_result.stopped {
            // Keep the answer from the last fully completed depth.
            break;
        }
        best = search_result;

        if debug {
            eprintln!(
                "info depth {} score {} nodes {} move {}",
                best.depth, best.score, nodes, best.best_move
            );
        }
    }

    debug_assert!(board.is_legal_move(best.best_move));

    // Update values with those tracked in top level.
    best.nodes = nodes;
    best.elapsed = start_time.elapsed();
    best
}
