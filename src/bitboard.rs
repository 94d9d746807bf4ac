//! A way to efficiently encode the set of blocked cells of a board,
//! where each bit index of a 128-bit unsigned integer represents one cell.
//!
//! Data Order:
//! * Row-major, top-left cell first
//! * index = row * width + col
//! * (0, 0) = least significant bit = 0b1
//!
//! Grid dimensions are runtime values, so unlike a chess bitboard the cells
//! are addressed by plain index and all geometry lives in [`Board`].
//!
//! [`Board`]: crate::board::Board

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not};

/// Alias for inner type of Bitboard. Useful for const evaluation.
pub type BitboardKind = u128;

/// Bitboard is a wrapper around a u128 integer, where each bit represents
/// blocked or open on its corresponding grid cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Bitboard(pub(crate) BitboardKind);

impl Bitboard {
    pub const EMPTY: Bitboard = Self(0x0);

    /// Returns true if no bits are set.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the bit at `idx` is set.
    pub const fn has_idx(&self, idx: usize) -> bool {
        self.0 & (1 << idx) != 0
    }

    pub fn set_idx(&mut self, idx: usize) {
        self.0 |= 1 << idx;
    }

    pub fn clear_idx(&mut self, idx: usize) {
        self.0 &= !(1 << idx);
    }

    /// Number of set bits.
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}
impl BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}
impl BitOr for Bitboard {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}
impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
impl BitXor for Bitboard {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}
impl Not for Bitboard {
    type Output = Self;
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#034x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_clear_count() {
        let mut bb = Bitboard::EMPTY;
        assert!(bb.is_empty());

        bb.set_idx(0);
        bb.set_idx(63);
        bb.set_idx(127);
        assert_eq!(bb.count(), 3);
        assert!(bb.has_idx(0));
        assert!(bb.has_idx(63));
        assert!(bb.has_idx(127));
        assert!(!bb.has_idx(64));

        bb.clear_idx(63);
        assert_eq!(bb.count(), 2);
        assert!(!bb.has_idx(63));
    }

    #[test]
    fn bit_ops() {
        let mut a = Bitboard::EMPTY;
        let mut b = Bitboard::EMPTY;
        a.set_idx(1);
        a.set_idx(2);
        b.set_idx(2);
        b.set_idx(3);

        assert_eq!((a & b).count(), 1);
        assert_eq!((a | b).count(), 3);
        assert_eq!((a ^ b).count(), 2);
        assert!((a & !b).has_idx(1));
    }
}
