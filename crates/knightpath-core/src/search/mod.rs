//! 探索モジュール
//!
//! - `PathSearcher`: 分枝限定の再帰探索（連結判定による枝刈り、残り次数による順序付け）
//! - `StartPlan`: 対称性による開始マスの削減と補正
//! - `ParallelCounter`: 開始マス単位の並列実行と集約

mod options;
pub mod parallel;
mod path_search;
mod stats;
pub mod symmetry;

pub use options::{CandidateOrder, SearchOptions, SymmetryMode};
pub use parallel::ParallelCounter;
pub use path_search::PathSearcher;
pub use stats::SearchStats;
pub use symmetry::{StartPlan, WeightedStart};
