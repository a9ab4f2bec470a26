//! 開始マスの対称性削減
//!
//! 無向経路は両端から1回ずつ、計2回数えられる。さらに長方形の盤面は180度回転
//! （`id -> cells - 1 - id`）で自分自身に重なるので、回転で移り合う開始マスの
//! 部分木は同じ数を返す。
//!
//! 計画は (開始マス, 重み) の列と除数からなり、答えは
//! `Σ 重み × count(開始マス) / 除数` で得る。
//!
//! - 全マス: 重み1、除数2
//! - 180度回転: `id < rot(id)` のマスを重み2、中心マス（盤の縦横が共に奇数のとき
//!   のみ存在）を重み1、除数2。中心マスから出る有向経路は回転で対になるので
//!   常に偶数であり、割り切れる。
//!
//! 縦が奇数の盤では代表元は「上半分の行と、中央行の左半分」に一致する。

use super::options::SymmetryMode;
use crate::types::{Board, Cell};

/// 重み付きの開始マス
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightedStart {
    pub cell: Cell,
    pub weight: u64,
}

/// 開始マスの計画
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartPlan {
    board: Board,
    starts: Vec<WeightedStart>,
    divisor: u64,
}

impl StartPlan {
    /// 盤面を行数 <= 列数 に正規化してから計画を立てる
    pub fn new(board: Board, mode: SymmetryMode) -> StartPlan {
        let board = board.normalized();
        let half_turn = match mode {
            SymmetryMode::Auto => !board.is_square(),
            SymmetryMode::Full => false,
            SymmetryMode::HalfTurn => true,
        };
        if half_turn {
            Self::half_turn(board)
        } else {
            Self::full(board)
        }
    }

    fn full(board: Board) -> StartPlan {
        let starts = board
            .iter_cells()
            .map(|cell| WeightedStart { cell, weight: 1 })
            .collect();
        StartPlan {
            board,
            starts,
            divisor: 2,
        }
    }

    fn half_turn(board: Board) -> StartPlan {
        let starts = board
            .iter_cells()
            .filter_map(|cell| {
                let image = board.rotate_half(cell);
                if cell < image {
                    Some(WeightedStart { cell, weight: 2 })
                } else if cell == image {
                    Some(WeightedStart { cell, weight: 1 })
                } else {
                    None
                }
            })
            .collect();
        StartPlan {
            board,
            starts,
            divisor: 2,
        }
    }

    /// 正規化後の盤面
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn starts(&self) -> &[WeightedStart] {
        &self.starts
    }

    #[inline]
    pub fn divisor(&self) -> u64 {
        self.divisor
    }

    /// 重み付き合計を最終的な無向経路数に直す
    #[inline]
    pub fn finish(&self, weighted_sum: u64) -> u64 {
        weighted_sum / self.divisor
    }
}
