//! Move generation.
//!
//! A placed player moves like a chess queen: any number of cells along one of
//! the 8 compass directions, stopping before the first blocked cell or edge.
//! An unplaced player may place onto any open cell.
//!
//! Compass Rose Stepping, in (dcol, drow):
//! ```text
//! NoWe        North        NoEa
//!     (-1,-1) (0,-1) (1,-1)
//! West(-1, 0)    0   (1, 0) East
//!     (-1, 1) (0, 1) (1, 1)
//! SoWe        South        SoEa
//! ```

use crate::board::Board;
use crate::coretypes::{Coord, Move};
use crate::movelist::MoveList;

/// The 8 queen directions as (dcol, drow) steps.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Step one cell from `coord` in a direction.
/// Returns None when the step leaves the board.
pub(crate) fn step(board: &Board, coord: Coord, (dcol, drow): (i8, i8)) -> Option<Coord> {
    let col = coord.col as i16 + dcol as i16;
    let row = coord.row as i16 + drow as i16;

    (col >= 0 && row >= 0 && col < board.width() as i16 && row < board.height() as i16)
        .then(|| Coord::new(col as u8, row as u8))
}

/// Push every queen slide from `from` onto the list.
/// Moves are generated direction by direction, nearest destination first,
/// which fixes the deterministic ordering the search tie-break depends on.
pub(crate) fn queen_moves(board: &Board, from: Coord, list: &mut MoveList) {
    for direction in DIRECTIONS {
        let mut cursor = from;
        while let Some(to) = step(board, cursor, direction) {
            if board.is_blocked(to) {
                break;
            }
            list.push(Move::Slide { from, to });
            cursor = to;
        }
    }
}

/// Count queen slides from `from` without materializing them.
pub(crate) fn count_queen_moves(board: &Board, from: Coord) -> u32 {
    let mut count = 0;
    for direction in DIRECTIONS {
        let mut cursor = from;
        while let Some(to) = step(board, cursor, direction) {
            if board.is_blocked(to) {
                break;
            }
            count += 1;
            cursor = to;
        }
    }
    count
}

/// Push a placement move for every open cell onto the list, in row-major order.
pub(crate) fn placements(board: &Board, list: &mut MoveList) {
    for row in 0..board.height() {
        for col in 0..board.width() {
            let coord = Coord::new(col, row);
            if !board.is_blocked(coord) {
                list.push(Move::Place(coord));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::Player;

    #[test]
    fn step_stays_in_bounds() {
        let board = Board::new(3, 3).unwrap();
        let corner = Coord::new(0, 0);
        assert_eq!(step(&board, corner, (-1, 0)), None);
        assert_eq!(step(&board, corner, (0, -1)), None);
        assert_eq!(step(&board, corner, (1, 1)), Some(Coord::new(1, 1)));
    }

    #[test]
    fn queen_moves_from_center_of_open_board() {
        // Center of an otherwise open 5x5 board reaches 16 cells,
        // but the mover's own cell is blocked and never a destination.
        let center = Coord::new(2, 2);
        let board = Board::new(5, 5)
            .unwrap()
            .try_move(Move::Place(center))
            .unwrap();

        assert_eq!(count_queen_moves(&board, center), 16);
    }

    #[test]
    fn rays_stop_at_first_blocker() {
        // P2 placed directly east of P1 cuts that entire ray short.
        let board = Board::new(5, 1).unwrap();
        let board = board.try_move(Move::Place(Coord::new(0, 0))).unwrap();
        let board = board.try_move(Move::Place(Coord::new(2, 0))).unwrap();

        // Only b1 remains reachable for P1.
        assert_eq!(count_queen_moves(&board, Coord::new(0, 0)), 1);
        assert_eq!(board.mobility(Player::P1), 1);
    }
}
