//! The fundamental and simple types of the isolation engine.

use std::fmt::{self, Display};
use std::ops::{Add, AddAssign, Mul, Neg, Not, Sub};
use std::str::FromStr;

use crate::error::{self, ErrorKind};

///////////////
// Constants //
///////////////

/// Default grid dimensions used for tournament play.
pub const DEFAULT_WIDTH: u8 = 9;
pub const DEFAULT_HEIGHT: u8 = 7;

/// The most cells any board may have, so a blocked-cell set fits in one u128.
pub const MAX_CELLS: usize = 128;

/// The most moves any single position can have.
/// A placement move may target every open cell on the board.
pub const MAX_MOVES: usize = MAX_CELLS;

/// The greatest depth reachable for the engine during search.
/// Every ply blocks a cell, so no game exceeds MAX_CELLS plies.
pub const MAX_DEPTH: PlyKind = MAX_CELLS as PlyKind;

/// The greatest number of plies supported in a game history.
pub const MAX_HISTORY: usize = MAX_CELLS;

/////////////////////////
// Data and Structures //
/////////////////////////

/// Type alias for max ply/depth.
pub type PlyKind = u8;

/// Counter for plies played in a game.
pub type MoveCount = u16;

// Type alias to make changing Score inner type easy if needed.
pub type ScoreKind = i32;

/// Evaluation score of a position, higher is better for the perspective player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Score(pub ScoreKind);

/// One of the two players of a game. P1 always moves first on a new board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    P1,
    P2,
}

/// A single cell of the grid. `col` counts from the left, `row` from the top,
/// both starting at zero.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coord {
    pub col: u8,
    pub row: u8,
}

/// A half move taken by one player.
///
/// The first move of each player places them on any open cell.
/// Every move after slides like a chess queen from their current cell.
/// `Forfeit` is the sentinel returned when no legal move exists.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Move {
    Place(Coord),
    Slide { from: Coord, to: Coord },
    Forfeit,
}

/////////////////////
// Implementations //
/////////////////////

impl Score {
    pub const MIN: Score = Self(ScoreKind::MIN + 1); // + 1 to avoid overflow error on negate.
    pub const MAX: Score = Self(ScoreKind::MAX);

    /// Sentinel for a proven win for the perspective player.
    pub const WIN: Score = Self(1_000_000);
    /// Sentinel for a proven loss for the perspective player.
    pub const LOSS: Score = Self(-1_000_000);

    /// Returns the sign of the score, either 1, -1, or 0.
    pub const fn signum(&self) -> ScoreKind {
        self.0.signum()
    }

    /// Returns true if this score is a proven terminal win or loss.
    pub const fn is_terminal(&self) -> bool {
        self.0 >= Self::WIN.0 || self.0 <= Self::LOSS.0
    }

    pub const fn is_win(&self) -> bool {
        self.0 >= Self::WIN.0
    }

    pub const fn is_loss(&self) -> bool {
        self.0 <= Self::LOSS.0
    }
}

impl Add for Score {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}
impl Sub for Score {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}
impl Mul for Score {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}
impl Neg for Score {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
impl Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Player {
    /// Index into per-player arrays.
    pub const fn idx(&self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }
}

impl Not for Player {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::P1 => write!(f, "1"),
            Player::P2 => write!(f, "2"),
        }
    }
}

impl FromStr for Player {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        match s {
            "1" => Ok(Player::P1),
            "2" => Ok(Player::P2),
            _ => Err((ErrorKind::ParsePlayerMalformed, s).into()),
        }
    }
}

impl Coord {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }
}

/// Displays in algebraic-like form, column letter then 1-based row number.
/// Columns past `z` have no text form and do not occur on supported boards.
impl Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let col_ch = (b'a' + self.col) as char;
        write!(f, "{}{}", col_ch, self.row + 1)
    }
}

impl FromStr for Coord {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        let mut chars = s.chars();
        let col_ch = chars
            .next()
            .ok_or_else(|| error::Error::from((ErrorKind::ParseCoordMalformed, s)))?;
        if !col_ch.is_ascii_lowercase() {
            return Err((ErrorKind::ParseCoordMalformed, s).into());
        }
        let col = col_ch as u8 - b'a';

        let row_num: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| error::Error::from((ErrorKind::ParseCoordMalformed, s)))?;
        if row_num == 0 {
            return Err((ErrorKind::ParseCoordMalformed, s).into());
        }

        Ok(Coord::new(col, row_num - 1))
    }
}

impl Move {
    /// Destination cell of this move, or None for the forfeit sentinel.
    pub const fn to(&self) -> Option<Coord> {
        match self {
            Move::Place(to) => Some(*to),
            Move::Slide { to, .. } => Some(*to),
            Move::Forfeit => None,
        }
    }

    /// Returns true if this move is the forfeit sentinel.
    pub const fn is_forfeit(&self) -> bool {
        matches!(self, Move::Forfeit)
    }
}

/// Long-algebraic style text form: `c4` for a placement, `c4e6` for a slide,
/// `0000` for the forfeit sentinel.
impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Move::Place(to) => write!(f, "{to}"),
            Move::Slide { from, to } => write!(f, "{from}{to}"),
            Move::Forfeit => write!(f, "0000"),
        }
    }
}

impl FromStr for Move {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        if s == "0000" {
            return Ok(Move::Forfeit);
        } else if s.is_empty() {
            return Err((ErrorKind::ParseCoordMalformed, s).into());
        }

        // A coordinate is one column letter followed by row digits, so a
        // second letter marks where the destination coordinate begins.
        let split = s[1..]
            .find(|ch: char| ch.is_ascii_lowercase())
            .map(|pos| pos + 1);

        match split {
            Some(pos) => {
                let from = Coord::from_str(&s[..pos])?;
                let to = Coord::from_str(&s[pos..])?;
                Ok(Move::Slide { from, to })
            }
            None => Ok(Move::Place(Coord::from_str(s)?)),
        }
    }
}
