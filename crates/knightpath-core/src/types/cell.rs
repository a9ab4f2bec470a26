//! マス番号

use std::fmt;

/// マス番号（0-63）
///
/// `row * cols + col` で割り当てる。盤面の寸法を持たないので、
/// 行・列への変換は [`crate::Board::coords`] を使う。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cell(u8);

impl Cell {
    /// 表現できるマスの数
    pub const NUM: usize = 64;

    /// 番号から生成
    #[inline]
    pub const fn new(index: u8) -> Option<Cell> {
        if (index as usize) < Self::NUM {
            Some(Cell(index))
        } else {
            None
        }
    }

    /// 範囲チェックなしで生成
    ///
    /// 呼び出し側で `index < 64` を保証すること。
    #[inline]
    pub(crate) const fn from_u8_unchecked(index: u8) -> Cell {
        debug_assert!((index as usize) < Self::NUM);
        Cell(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_range() {
        assert_eq!(Cell::new(0).map(Cell::index), Some(0));
        assert_eq!(Cell::new(63).map(Cell::index), Some(63));
        assert!(Cell::new(64).is_none());
    }
}
