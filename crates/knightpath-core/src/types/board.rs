//! 盤面寸法

use serde::Serialize;
use std::fmt;

use super::{BoardError, Cell};
use crate::bitboard::Bitboard;

/// k×n の盤面（k 行 n 列）
///
/// 生成時に `1 <= rows`, `1 <= cols`, `rows * cols <= 64` を検証する。
/// 以降の探索はすべてのマス集合を 1 ワードに収める前提で動く。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    rows: u8,
    cols: u8,
}

impl Board {
    /// 最大マス数
    pub const MAX_CELLS: usize = Cell::NUM;

    pub fn new(rows: usize, cols: usize) -> Result<Board, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyDimension { rows, cols });
        }
        // rows, cols のどちらかが巨大でも乗算があふれないようにする
        let cells = rows.saturating_mul(cols);
        if cells > Self::MAX_CELLS {
            return Err(BoardError::TooLarge { rows, cols, cells });
        }
        Ok(Board {
            rows: rows as u8,
            cols: cols as u8,
        })
    }

    #[inline]
    pub const fn rows(self) -> usize {
        self.rows as usize
    }

    #[inline]
    pub const fn cols(self) -> usize {
        self.cols as usize
    }

    /// マス数
    #[inline]
    pub const fn cells(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    #[inline]
    pub const fn is_square(self) -> bool {
        self.rows == self.cols
    }

    /// 全マスが立っている集合（下位 `cells()` ビット）
    #[inline]
    pub const fn all(self) -> Bitboard {
        Bitboard::low_bits(self.cells())
    }

    /// 行と列を入れ替えた盤面
    #[inline]
    pub const fn transposed(self) -> Board {
        Board {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// 行数 <= 列数 に正規化した盤面
    ///
    /// k×n と n×k の桂馬グラフは同型なので、計数結果は変わらない。
    #[inline]
    pub const fn normalized(self) -> Board {
        if self.rows > self.cols {
            self.transposed()
        } else {
            self
        }
    }

    /// 行・列からマスを得る
    #[inline]
    pub fn cell(self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows() && col < self.cols() {
            Some(Cell::from_u8_unchecked((row * self.cols() + col) as u8))
        } else {
            None
        }
    }

    /// マスの (行, 列)
    #[inline]
    pub const fn coords(self, cell: Cell) -> (usize, usize) {
        (cell.index() / self.cols as usize, cell.index() % self.cols as usize)
    }

    /// 180度回転したマス（`id -> cells - 1 - id`）
    #[inline]
    pub const fn rotate_half(self, cell: Cell) -> Cell {
        Cell::from_u8_unchecked((self.cells() - 1 - cell.index()) as u8)
    }

    /// 全マスを番号順に列挙
    pub fn iter_cells(self) -> impl Iterator<Item = Cell> {
        (0..self.cells() as u8).map(Cell::from_u8_unchecked)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({}x{})", self.rows, self.cols)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
