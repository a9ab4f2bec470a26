//! 残りマスの連結判定
//!
//! 未訪問マスの集合が桂馬跳びだけで連結かどうかを調べる。
//! 連結でなければ 1 本の経路で全マスを回ることはできないので、その枝は打ち切れる。
//! 逆は成り立たない（連結でも完走できるとは限らない）ため、枝刈りにしか使わない。

use crate::bitboard::{Bitboard, NeighborTable};

/// `rem` のマスが `rem` 内の辺だけで互いに到達可能か
///
/// 空集合は連結とみなす。最下位マスから幅優先で層ごとに広げる。
pub fn is_connected(rem: Bitboard, table: &NeighborTable) -> bool {
    let Some(seed) = rem.lsb() else {
        return true;
    };

    let mut reached = Bitboard::from_cell(seed);
    let mut frontier = reached;
    while frontier.is_not_empty() {
        let mut next = Bitboard::EMPTY;
        for cell in frontier {
            next |= table.neighbors(cell) & rem;
        }
        frontier = next.and_not(reached);
        reached |= frontier;
        if reached == rem {
            return true;
        }
    }
    reached == rem
}

/// 盤面全体の桂馬グラフが連結か
#[inline]
pub fn is_board_connected(table: &NeighborTable) -> bool {
    is_connected(table.board().all(), table)
}
