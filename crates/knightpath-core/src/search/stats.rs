//! 探索統計
//!
//! 開始マスごとにローカルに数え、集約時に `merge` で足し合わせる。
//! 計数結果には影響しない。

use serde::{Deserialize, Serialize};

/// 探索統計カウンタ
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// 総ノード数（探索関数の呼び出し回数）
    pub nodes: u64,
    /// 連結判定で打ち切った候補数
    pub pruned: u64,
    /// 候補が一つもなかった（全マス未到達の）ノード数
    pub dead_ends: u64,
    /// 全マスに到達した有向経路数
    pub paths: u64,
}

impl SearchStats {
    /// 別の統計を足し込む（可換・結合的）
    #[inline]
    pub fn merge(self, other: SearchStats) -> SearchStats {
        SearchStats {
            nodes: self.nodes + other.nodes,
            pruned: self.pruned + other.pruned,
            dead_ends: self.dead_ends + other.dead_ends,
            paths: self.paths + other.paths,
        }
    }
}
