//! 探索オプション

use serde::{Deserialize, Serialize};

/// 候補手の並べ方
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateOrder {
    /// 残り次数の昇順（同値はマス番号順）。Warnsdorff 則
    #[default]
    RemainingDegree,
    /// マス番号の昇順
    Index,
}

/// 開始マスの対称性削減
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymmetryMode {
    /// 正方形は全マス÷2、長方形は180度回転の代表元のみ
    #[default]
    Auto,
    /// 常に全マスから探索して2で割る
    Full,
    /// 正方形を含め常に180度回転の代表元のみ
    HalfTurn,
}

/// 計数の設定
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// 残りマスの連結判定による枝刈り
    pub prune: bool,
    pub order: CandidateOrder,
    pub symmetry: SymmetryMode,
    /// ワーカースレッド数（None は rayon の既定値）
    pub threads: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            prune: true,
            order: CandidateOrder::default(),
            symmetry: SymmetryMode::default(),
            threads: None,
        }
    }
}

impl SearchOptions {
    pub fn with_prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    pub fn with_order(mut self, order: CandidateOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_symmetry(mut self, symmetry: SymmetryMode) -> Self {
        self.symmetry = symmetry;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}
