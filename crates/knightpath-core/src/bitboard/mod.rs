//! ビットボードモジュール
//!
//! 最大64マスの盤面を64bitで表現し、訪問済み集合・残りマス集合の演算を提供する。
//!
//! - `Bitboard`: 64bit盤面表現（bit i = マス番号 i）
//! - `NeighborTable`: 桂馬（ナイト）跳びの隣接テーブル

mod core;
mod tables;

pub use self::core::Bitboard;
pub use self::core::BitboardIter;
pub use tables::{KNIGHT_OFFSETS, NeighborTable};
