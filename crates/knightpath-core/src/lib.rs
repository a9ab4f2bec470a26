//! # knightpath-core
//!
//! k×n 盤の桂馬跳び（チェスのナイト）グラフにおける無向ハミルトン路を正確に数える。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Board, Cell, エラー）
//! - `bitboard`: 64bit盤面表現と隣接テーブル
//! - `connectivity`: 残りマスの連結判定（枝刈り用）
//! - `search`: 分枝限定探索、対称性削減、並列集約
//!
//! ```
//! use knightpath_core::count_hamiltonian_paths;
//!
//! assert_eq!(count_hamiltonian_paths(3, 4).unwrap(), 8);
//! ```

pub mod bitboard;
pub mod connectivity;
mod counter;
pub mod search;
pub mod types;

pub use bitboard::{Bitboard, NeighborTable};
pub use counter::{CountReport, PathCounter, count_hamiltonian_paths};
pub use search::{CandidateOrder, SearchOptions, SearchStats, SymmetryMode};
pub use types::{Board, BoardError, Cell, CountError};
