//! Static evaluation functions.
//!
//! Every evaluation here is relative to a perspective player: a higher score
//! is better for that player, whoever's turn it is. Search calls the
//! evaluation only on non-terminal boards at its cutoff depth; terminal
//! boards short-circuit to the proven [`terminal`] utility instead.
//!
//! The engine takes the evaluation as a plain function value, so callers can
//! drop in their own heuristic without touching search.

use crate::board::Board;
use crate::coretypes::{Coord, Player, Score, ScoreKind};

/// The evaluation contract: score a non-terminal board for a perspective
/// player. Must be a total, side-effect-free function of its inputs.
pub type EvalFn = fn(&Board, Player) -> Score;

/// Given a terminal board, return the proven utility for the perspective
/// player. The player stuck without a move is the loser.
pub fn terminal(board: &Board, perspective: Player) -> Score {
    board.utility(perspective)
}

/// Number of moves open to the perspective player.
/// The cheapest useful heuristic: more options now means harder to isolate.
pub fn open_move_score(board: &Board, perspective: Player) -> Score {
    Score(board.mobility(perspective) as ScoreKind)
}

/// Difference between own and opponent mobility.
/// Rewards moves that simultaneously keep options open and shut the
/// opponent's down, and is the engine's default.
pub fn improved_score(board: &Board, perspective: Player) -> Score {
    let own = board.mobility(perspective) as ScoreKind;
    let opponent = board.mobility(!perspective) as ScoreKind;
    Score(own - opponent)
}

/// Negated squared distance from the grid center.
/// Edge cells lose queen rays, so staying central preserves mobility.
/// An unplaced player scores zero.
pub fn center_score(board: &Board, perspective: Player) -> Score {
    match board.location(perspective) {
        None => Score(0),
        Some(coord) => Score(-center_distance_sq(board, coord)),
    }
}

/// Doubled-coordinate squared distance to the board center, exact for both
/// odd and even dimensions.
fn center_distance_sq(board: &Board, coord: Coord) -> ScoreKind {
    let dcol = 2 * coord.col as ScoreKind - (board.width() as ScoreKind - 1);
    let drow = 2 * coord.row as ScoreKind - (board.height() as ScoreKind - 1);
    (dcol * dcol + drow * drow) / 4
}
