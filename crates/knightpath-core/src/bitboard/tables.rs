//! 桂馬跳びの隣接テーブル

use crate::types::{Board, Cell};

use super::Bitboard;

/// ナイトの移動量 (行, 列)
pub const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// マスごとの桂馬跳び先 [Cell]
///
/// 盤面ごとに一度だけ構築し、以降は読み取り専用で全スレッドから共有する。
/// 無向グラフなので `v ∈ nbr[u]` と `u ∈ nbr[v]` は常に一致する。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborTable {
    board: Board,
    masks: Vec<Bitboard>,
}

impl NeighborTable {
    pub fn new(board: Board) -> NeighborTable {
        let (rows, cols) = (board.rows() as isize, board.cols() as isize);
        let mut masks = vec![Bitboard::EMPTY; board.cells()];

        for cell in board.iter_cells() {
            let (r, c) = board.coords(cell);
            let mut mask = Bitboard::EMPTY;
            for &(dr, dc) in &KNIGHT_OFFSETS {
                let (rr, cc) = (r as isize + dr, c as isize + dc);
                // 盤外は捨てる
                if (0..rows).contains(&rr) && (0..cols).contains(&cc) {
                    if let Some(to) = board.cell(rr as usize, cc as usize) {
                        mask = mask.with(to);
                    }
                }
            }
            masks[cell.index()] = mask;
        }

        NeighborTable { board, masks }
    }

    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    /// 跳び先の集合
    #[inline]
    pub fn neighbors(&self, cell: Cell) -> Bitboard {
        self.masks[cell.index()]
    }

    /// 次数
    #[inline]
    pub fn degree(&self, cell: Cell) -> u32 {
        self.masks[cell.index()].count()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// 全マスのマスクを番号順に返す
    #[inline]
    pub fn masks(&self) -> &[Bitboard] {
        &self.masks
    }
}
