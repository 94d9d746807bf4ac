//! Holds Board struct, the most important data structure for the engine.
//! Board represents an isolation position.

use std::fmt::{self, Display};

use crate::bitboard::Bitboard;
use crate::coretypes::{Coord, Move, MoveCount, Player, Score};
use crate::coretypes::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_CELLS};
use crate::error::{self, ErrorKind};
use crate::movegen as mg;
use crate::movelist::MoveList;

/// struct Board
/// A complete data set that can represent any isolation position.
/// # Members:
/// * width, height - grid dimensions fixed at construction.
/// * blocked - setwise container of every cell any player has ever occupied.
/// * locations - current cell of each player, None before their first move.
/// * to_move - player whose turn it is.
/// * move_count - number of plies played so far.
///
/// A board is only ever changed by applying a move. Search takes successor
/// snapshots with [`Board::make_move`] rather than undoing in place, so no
/// branch of the tree can observe another branch's mutations.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    blocked: Bitboard,
    locations: [Option<Coord>; 2],
    to_move: Player,
    move_count: MoveCount,
}

impl Board {
    /// Create an empty board with both players unplaced and P1 to move.
    /// Fails if either dimension is zero or the cell count exceeds `MAX_CELLS`.
    pub fn new(width: u8, height: u8) -> error::Result<Self> {
        if width == 0 || height == 0 {
            return Err((ErrorKind::BoardEmpty, format!("{width}x{height}")).into());
        }
        if width as usize * height as usize > MAX_CELLS {
            return Err((ErrorKind::BoardTooLarge, format!("{width}x{height}")).into());
        }

        Ok(Self {
            width,
            height,
            blocked: Bitboard::EMPTY,
            locations: [None; 2],
            to_move: Player::P1,
            move_count: 0,
        })
    }

    /// Assemble a board from already-validated parts. Used by notation parsing.
    pub(crate) fn from_parts(
        width: u8,
        height: u8,
        blocked: Bitboard,
        locations: [Option<Coord>; 2],
        to_move: Player,
        move_count: MoveCount,
    ) -> Self {
        Self {
            width,
            height,
            blocked,
            locations,
            to_move,
            move_count,
        }
    }

    /// Const getters.
    pub fn width(&self) -> u8 {
        self.width
    }
    pub fn height(&self) -> u8 {
        self.height
    }
    pub fn to_move(&self) -> Player {
        self.to_move
    }
    pub fn move_count(&self) -> MoveCount {
        self.move_count
    }

    /// Total number of cells on the grid.
    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of cells no player has ever occupied.
    pub fn open_cells(&self) -> usize {
        self.cells() - self.blocked.count() as usize
    }

    /// Current cell of a player, or None before their first move.
    pub fn location(&self, player: Player) -> Option<Coord> {
        self.locations[player.idx()]
    }

    /// Bit index of a coordinate in the blocked set.
    pub(crate) fn idx(&self, coord: Coord) -> usize {
        coord.row as usize * self.width as usize + coord.col as usize
    }

    /// Returns true if some player has ever occupied the cell.
    /// Both players' current cells count as blocked.
    pub fn is_blocked(&self, coord: Coord) -> bool {
        self.blocked.has_idx(self.idx(coord))
    }

    /// Returns a list of all legal moves for the active player.
    /// The list is empty exactly when the active player has lost.
    ///
    /// Ordering is deterministic: placements in row-major cell order, slides
    /// direction by direction with nearest destination first.
    pub fn get_legal_moves(&self) -> MoveList {
        let mut legal_moves = MoveList::new();
        match self.location(self.to_move) {
            None => mg::placements(self, &mut legal_moves),
            Some(from) => mg::queen_moves(self, from, &mut legal_moves),
        }
        legal_moves
    }

    /// Checks if the given move is legal for the active player.
    pub fn is_legal_move(&self, mv: Move) -> bool {
        match (mv, self.location(self.to_move)) {
            (Move::Place(to), None) => self.in_bounds(to) && !self.is_blocked(to),
            (Move::Slide { from, to }, Some(loc)) => {
                from == loc && self.in_bounds(to) && self.reachable(from, to)
            }
            _ => false,
        }
    }

    /// Apply a move to self, in place.
    /// `do_move` does not check if the move is legal or not,
    /// it simply executes it while assuming legality.
    pub fn do_move(&mut self, mv: Move) {
        debug_assert!(self.is_legal_move(mv));

        let to = match mv {
            Move::Place(to) => to,
            Move::Slide { to, .. } => to,
            Move::Forfeit => return,
        };

        self.blocked.set_idx(self.idx(to));
        self.locations[self.to_move.idx()] = Some(to);
        self.to_move = !self.to_move;
        self.move_count += 1;
    }

    /// Generates a new Board from applying a move on the current Board,
    /// assuming legality. This is the search hot path, where every candidate
    /// move came out of `get_legal_moves`.
    pub fn make_move(&self, mv: Move) -> Self {
        let mut successor = *self;
        successor.do_move(mv);
        successor
    }

    /// Validating apply: returns the successor board, or `IllegalMove` if the
    /// move is not legal for the active player. The original is untouched.
    pub fn try_move(&self, mv: Move) -> error::Result<Self> {
        if self.is_legal_move(mv) {
            Ok(self.make_move(mv))
        } else {
            Err((ErrorKind::IllegalMove, mv).into())
        }
    }

    /// Returns true iff the active player has no legal move, and has lost.
    pub fn is_terminal(&self) -> bool {
        match self.location(self.to_move) {
            None => self.open_cells() == 0,
            Some(from) => mg::count_queen_moves(self, from) == 0,
        }
    }

    /// Score of a finished game from a player's perspective.
    /// The active player is the one stuck without a move, and is the loser.
    /// Only meaningful at terminal boards.
    pub fn utility(&self, perspective: Player) -> Score {
        debug_assert!(self.is_terminal());
        if self.to_move == perspective {
            Score::LOSS
        } else {
            Score::WIN
        }
    }

    /// Number of legal moves a player would have, whether or not it is their
    /// turn. Used by the mobility heuristics.
    pub fn mobility(&self, player: Player) -> u32 {
        match self.location(player) {
            None => self.open_cells() as u32,
            Some(from) => mg::count_queen_moves(self, from),
        }
    }

    pub(crate) fn in_bounds(&self, coord: Coord) -> bool {
        coord.col < self.width && coord.row < self.height
    }

    /// Returns true if `to` is open and on an unobstructed queen ray from `from`.
    fn reachable(&self, from: Coord, to: Coord) -> bool {
        if from == to || self.is_blocked(to) {
            return false;
        }

        let dcol = (to.col as i16 - from.col as i16).signum() as i8;
        let drow = (to.row as i16 - from.row as i16).signum() as i8;

        // Must lie on a rank, file, or exact diagonal.
        let col_dist = (to.col as i16 - from.col as i16).abs();
        let row_dist = (to.row as i16 - from.row as i16).abs();
        if col_dist != 0 && row_dist != 0 && col_dist != row_dist {
            return false;
        }

        let mut cursor = from;
        while let Some(next) = mg::step(self, cursor, (dcol, drow)) {
            if next == to {
                return true;
            }
            if self.is_blocked(next) {
                return false;
            }
            cursor = next;
        }
        false
    }
}

/// Defaults to the empty tournament-sized board.
impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap()
    }
}

/// Displays the grid with `.` open, `x` blocked, `1`/`2` player cells,
/// followed by the player to move and ply count.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let coord = Coord::new(col, row);
                let symbol = if self.location(Player::P1) == Some(coord) {
                    '1'
                } else if self.location(Player::P2) == Some(coord) {
                    '2'
                } else if self.is_blocked(coord) {
                    'x'
                } else {
                    '.'
                };
                write!(f, "{symbol} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "To move: {}  Ply: {}", self.to_move, self.move_count)
    }
}
