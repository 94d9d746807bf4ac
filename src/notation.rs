//! Board notation, a compact text form for isolation positions.
//!
//! A notation string has two whitespace-separated fields: the grid and the
//! player to move. The grid is one string per row joined by `/`, top row
//! first, with one symbol per cell:
//!
//! * `.` - open cell
//! * `x` - blocked cell no player currently occupies
//! * `1` / `2` - a player's current cell (also blocked)
//!
//! Example, a 3x3 midgame with P2 to move:
//!
//! ```text
//! .1./x../..2 2
//! ```
//!
//! Width and height are taken from the rows. The ply counter is recovered
//! from the position itself: every ply blocks exactly one new cell, so the
//! blocked-cell count equals the number of plies played.

use std::error;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::coretypes::{Coord, Move, Player, MAX_CELLS};
use crate::error::Result;

/// Errors from parsing a board notation string.
#[derive(Debug, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum ParseNotationError {
    MissingField,
    NoRows,
    RaggedRows,
    TooManyCells,
    IllegalSymbol(char),
    DuplicatePlayer(Player),
    Player,
}

impl Display for ParseNotationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "expected '<grid> <player-to-move>'"),
            Self::NoRows => write!(f, "grid field has no rows"),
            Self::RaggedRows => write!(f, "grid rows differ in length"),
            Self::TooManyCells => write!(f, "grid exceeds {MAX_CELLS} cells"),
            Self::IllegalSymbol(ch) => write!(f, "illegal grid symbol '{ch}'"),
            Self::DuplicatePlayer(player) => write!(f, "player {player} appears twice"),
            Self::Player => write!(f, "player field must be '1' or '2'"),
        }
    }
}

impl error::Error for ParseNotationError {}

/// Conversions between a type and its board notation string.
pub trait Notation: Sized {
    fn parse_notation(s: &str) -> Result<Self>;
    fn to_notation(&self) -> String;
}

impl Notation for Board {
    fn parse_notation(s: &str) -> Result<Self> {
        let mut fields = s.split_whitespace();
        let grid = fields.next().ok_or(ParseNotationError::MissingField)?;
        let player_field = fields.next().ok_or(ParseNotationError::MissingField)?;

        let to_move = match player_field {
            "1" => Player::P1,
            "2" => Player::P2,
            _ => return Err(ParseNotationError::Player.into()),
        };

        let rows: Vec<&str> = grid.split('/').collect();
        let height = rows.len();
        let width = rows[0].chars().count();
        if width == 0 {
            return Err(ParseNotationError::NoRows.into());
        }
        if rows.iter().any(|row| row.chars().count() != width) {
            return Err(ParseNotationError::RaggedRows.into());
        }
        if width * height > MAX_CELLS || width > u8::MAX as usize || height > u8::MAX as usize {
            return Err(ParseNotationError::TooManyCells.into());
        }

        let mut blocked = Bitboard::EMPTY;
        let mut locations: [Option<Coord>; 2] = [None; 2];

        for (row, row_str) in rows.iter().enumerate() {
            for (col, symbol) in row_str.chars().enumerate() {
                let coord = Coord::new(col as u8, row as u8);
                let idx = row * width + col;
                match symbol {
                    '.' => continue,
                    'x' => blocked.set_idx(idx),
                    '1' | '2' => {
                        let player = if symbol == '1' { Player::P1 } else { Player::P2 };
                        if locations[player.idx()].is_some() {
                            return Err(ParseNotationError::DuplicatePlayer(player).into());
                        }
                        locations[player.idx()] = Some(coord);
                        blocked.set_idx(idx);
                    }
                    other => return Err(ParseNotationError::IllegalSymbol(other).into()),
                }
            }
        }

        Ok(Board::from_parts(
            width as u8,
            height as u8,
            blocked,
            locations,
            to_move,
            blocked.count() as u16,
        ))
    }

    fn to_notation(&self) -> String {
        let mut notation = String::with_capacity(self.cells() + self.height() as usize + 2);

        for row in 0..self.height() {
            if row > 0 {
                notation.push('/');
            }
            for col in 0..self.width() {
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
                notation.push(symbol);
            }
        }

        notation.push(' ');
        notation.push_str(&self.to_move().to_string());
        notation
    }
}

impl FromStr for Board {
    type Err = crate::error::Error;
    fn from_str(s: &str) -> Result<Self> {
        Board::parse_notation(s)
    }
}

/// Parse a sequence of moves in text form, e.g. `"b2 c3 b2b4"`.
pub fn parse_moves(s: &str) -> Result<Vec<Move>> {
    s.split_whitespace().map(Move::from_str).collect()
}
