//! Bitboard（64bit盤面表現）

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::types::Cell;

/// Bitboard（64bit、bit i がマス番号 i に対応）
///
/// `Not` は盤面の外側のビットも反転するので、盤面内に限定するときは
/// `Board::all()` と AND を取ること。
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    /// 空のBitboard
    pub const EMPTY: Bitboard = Bitboard(0);

    /// 生のビット列から生成
    #[inline]
    pub const fn from_bits(bits: u64) -> Bitboard {
        Bitboard(bits)
    }

    /// 単一マスのBitboard
    #[inline]
    pub const fn from_cell(cell: Cell) -> Bitboard {
        Bitboard(1u64 << cell.index())
    }

    /// 下位 `n` ビットが立っているBitboard（`n == 64` で全ビット）
    #[inline]
    pub const fn low_bits(n: usize) -> Bitboard {
        if n >= 64 {
            Bitboard(u64::MAX)
        } else {
            Bitboard((1u64 << n) - 1)
        }
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// 空かどうか
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// 空でないかどうか
    #[inline]
    pub const fn is_not_empty(self) -> bool {
        self.0 != 0
    }

    /// ビットが立っている数
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// マスが含まれているか
    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        self.0 & (1u64 << cell.index()) != 0
    }

    /// マスを追加した集合
    #[inline]
    pub const fn with(self, cell: Cell) -> Bitboard {
        Bitboard(self.0 | (1u64 << cell.index()))
    }

    /// `self` から `other` を除いた集合
    #[inline]
    pub const fn and_not(self, other: Bitboard) -> Bitboard {
        Bitboard(self.0 & !other.0)
    }

    /// 最下位ビットのマスを取得（消さない）
    #[inline]
    pub const fn lsb(self) -> Option<Cell> {
        if self.0 == 0 {
            None
        } else {
            Some(Cell::from_u8_unchecked(self.0.trailing_zeros() as u8))
        }
    }

    /// 最下位ビットのマスを取得して消す
    ///
    /// 空でないことが保証されている場合のみ使用すること。
    #[inline]
    pub fn pop(&mut self) -> Cell {
        debug_assert!(self.is_not_empty(), "pop() called on empty Bitboard");
        let idx = self.0.trailing_zeros();
        self.0 &= self.0.wrapping_sub(1);
        Cell::from_u8_unchecked(idx as u8)
    }

    /// イテレータを返す
    #[inline]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

/// Bitboardのイテレータ（マス番号の昇順）
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.pop())
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Cell;
    type IntoIter = BitboardIter;

    #[inline]
    fn into_iter(self) -> BitboardIter {
        self.iter()
    }
}

// === 演算子 ===

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitboard({:#018x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(i: u8) -> Cell {
        Cell::new(i).unwrap()
    }

    #[test]
    fn test_low_bits() {
        assert_eq!(Bitboard::low_bits(0), Bitboard::EMPTY);
        assert_eq!(Bitboard::low_bits(12).bits(), 0xFFF);
        assert_eq!(Bitboard::low_bits(63).bits(), u64::MAX >> 1);
        assert_eq!(Bitboard::low_bits(64).bits(), u64::MAX);
    }

    #[test]
    fn test_pop_and_iter() {
        let mut bb = Bitboard::from_cell(cell(3)) | Bitboard::from_cell(cell(40));
        assert_eq!(bb.count(), 2);
        assert_eq!(bb.lsb(), Some(cell(3)));

        let cells: Vec<_> = bb.iter().collect();
        assert_eq!(cells, vec![cell(3), cell(40)]);

        assert_eq!(bb.pop(), cell(3));
        assert_eq!(bb.pop(), cell(40));
        assert!(bb.is_empty());
        assert_eq!(bb.lsb(), None);
    }

    #[test]
    fn test_top_bit() {
        let bb = Bitboard::from_cell(cell(63));
        assert!(bb.contains(cell(63)));
        assert_eq!(bb.iter().next(), Some(cell(63)));
    }

    #[test]
    fn test_with_and_not() {
        let a = Bitboard::EMPTY.with(cell(1)).with(cell(2));
        let b = Bitboard::from_cell(cell(2));
        assert_eq!(a.and_not(b), Bitboard::from_cell(cell(1)));
        assert!(!a.and_not(b).contains(cell(2)));
    }
}
