//! MoveList types used in the isolation engine.
//!
//! The underlying type of MoveList may change at any time during
//! pre-1.0 development, so a MoveList type alias makes changes easy.

use arrayvec::ArrayVec;

use crate::coretypes::{Move, MAX_HISTORY, MAX_MOVES};

/// MoveList is a container that can hold at most `MAX_MOVES`, the most number
/// of moves for any isolation position.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// MoveHistory holds the sequence of moves played over a full game.
pub type MoveHistory = ArrayVec<Move, MAX_HISTORY>;
