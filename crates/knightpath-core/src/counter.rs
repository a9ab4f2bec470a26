//! 盤面1つ分の計数
//!
//! 盤面の検証 → 隣接テーブル構築 → 開始マス計画 → 並列探索 の順に進める。

use serde::Serialize;

use crate::bitboard::NeighborTable;
use crate::connectivity::is_board_connected;
use crate::search::{ParallelCounter, SearchOptions, SearchStats, StartPlan};
use crate::types::{Board, CountResult};

/// 計数結果
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CountReport {
    /// 呼び出し時の向きのままの盤面
    pub board: Board,
    /// 無向ハミルトン路の数
    pub count: u64,
    pub stats: SearchStats,
}

/// ハミルトン路の計数器
#[derive(Clone, Copy, Debug, Default)]
pub struct PathCounter {
    options: SearchOptions,
}

impl PathCounter {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// k×n 盤の無向ハミルトン路を数える
    ///
    /// `k*n > 64` は探索前に `BoardError::TooLarge` で失敗する。
    pub fn count(&self, rows: usize, cols: usize) -> CountResult<CountReport> {
        let board = Board::new(rows, cols)?;
        let plan = StartPlan::new(board, self.options.symmetry);
        let table = NeighborTable::new(plan.board());

        // 2マス以上あって盤全体が非連結なら経路は存在しない
        if board.cells() > 1 && !is_board_connected(&table) {
            log::debug!("board {board}: knight graph is disconnected");
            return Ok(CountReport {
                board,
                count: 0,
                stats: SearchStats::default(),
            });
        }

        let counter = ParallelCounter::new(self.options.threads)?;
        log::debug!(
            "board {board}: {} starts on {} threads (prune={}, order={:?})",
            plan.starts().len(),
            counter.num_threads(),
            self.options.prune,
            self.options.order
        );

        let (count, stats) = counter.run(&table, &plan, &self.options);
        log::info!("board {board}: {count} paths ({} nodes)", stats.nodes);
        Ok(CountReport {
            board,
            count,
            stats,
        })
    }
}

/// k×n 盤の無向ハミルトン路（桂馬跳び）の数
///
/// 既定のオプション（枝刈りあり、残り次数順、自動対称性、全論理CPU）で数える。
pub fn count_hamiltonian_paths(rows: usize, cols: usize) -> CountResult<u64> {
    PathCounter::default().count(rows, cols).map(|report| report.count)
}
