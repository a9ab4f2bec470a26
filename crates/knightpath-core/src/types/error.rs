//! Error types for board validation and counting

use thiserror::Error;

/// 盤面寸法の検証エラー
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Zero rows or zero columns
    #[error("board dimensions must be positive: {rows}x{cols}")]
    EmptyDimension { rows: usize, cols: usize },

    /// More cells than fit in one 64-bit cell set
    #[error("board {rows}x{cols} has {cells} cells; at most 64 are supported")]
    TooLarge {
        rows: usize,
        cols: usize,
        cells: usize,
    },
}

/// 計数全体のエラー
#[derive(Error, Debug)]
pub enum CountError {
    #[error(transparent)]
    Board(#[from] BoardError),

    /// Worker pool could not be created; no partial count is produced
    #[error("failed to build search thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for counting operations
pub type CountResult<T> = Result<T, CountError>;
