//! 基本型
//!
//! - `Board`: 盤面寸法（行数・列数）と検証済みの制約
//! - `Cell`: マス番号（`row * cols + col`）
//! - `BoardError`: 盤面寸法の検証エラー

mod board;
mod cell;
mod error;

pub use board::Board;
pub use cell::Cell;
pub use error::{BoardError, CountError, CountResult};
