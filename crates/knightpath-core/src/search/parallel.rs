//! 開始マス単位の並列集約
//!
//! 開始マスごとの部分木は独立で、大きさは位置によって大きく偏る（隅は早く枯れ、
//! 中央は重い）。rayon の work-stealing で動的に割り振り、各タスクのローカル集計を
//! `reduce` で足し合わせる。共有するのは読み取り専用の隣接テーブルだけ。

use rayon::prelude::*;

use super::options::SearchOptions;
use super::path_search::PathSearcher;
use super::stats::SearchStats;
use super::symmetry::StartPlan;
use crate::bitboard::NeighborTable;
use crate::types::CountResult;

/// 並列計数器
pub struct ParallelCounter {
    pool: rayon::ThreadPool,
}

impl ParallelCounter {
    /// `threads` が None なら rayon の既定（論理CPU数）
    pub fn new(threads: Option<usize>) -> CountResult<ParallelCounter> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads.unwrap_or(0))
            .thread_name(|i| format!("knightpath-worker-{i}"))
            .build()?;
        Ok(ParallelCounter { pool })
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// 計画の全開始マスを探索し、(無向経路数, 統計) を返す
    ///
    /// 全部分木が終わるまで結果は出ない。
    pub fn run(
        &self,
        table: &NeighborTable,
        plan: &StartPlan,
        options: &SearchOptions,
    ) -> (u64, SearchStats) {
        let (weighted, stats) = self.pool.install(|| {
            plan.starts()
                .par_iter()
                .map(|start| {
                    let mut searcher = PathSearcher::new(table, options);
                    let count = searcher.count_from(start.cell);
                    let stats = searcher.stats();
                    #[cfg(feature = "search-stats")]
                    log::debug!(
                        "start {} (weight {}): {} paths, {} nodes, {} pruned",
                        start.cell,
                        start.weight,
                        count,
                        stats.nodes,
                        stats.pruned
                    );
                    (count * start.weight, stats)
                })
                .reduce(
                    || (0, SearchStats::default()),
                    |(a, sa), (b, sb)| (a + b, sa.merge(sb)),
                )
        });
        (plan.finish(weighted), stats)
    }
}
