//! 分枝限定による経路の数え上げ
//!
//! 状態は (現在マス, 訪問済み集合) のみで決まる。訪問済み集合は値で子へ渡すので、
//! 後戻りで共有状態を巻き戻す必要はない。再帰の深さはマス数（<= 64）で抑えられる。

use smallvec::SmallVec;

use super::options::{CandidateOrder, SearchOptions};
use super::stats::SearchStats;
use crate::bitboard::{Bitboard, NeighborTable};
use crate::connectivity::is_connected;
use crate::types::Cell;

/// 候補（残り次数, マス）。タプル順の比較がそのまま並べ順になる
type Candidate = (u32, Cell);

/// ナイトの跳び先は高々8
type CandidateList = SmallVec<[Candidate; 8]>;

/// 1つの開始マス分の探索器
///
/// 隣接テーブルは借用のみ。統計は探索器ごとに持ち、呼び出し側で集約する。
pub struct PathSearcher<'a> {
    table: &'a NeighborTable,
    all: Bitboard,
    prune: bool,
    order: CandidateOrder,
    stats: SearchStats,
}

impl<'a> PathSearcher<'a> {
    pub fn new(table: &'a NeighborTable, options: &SearchOptions) -> Self {
        Self {
            table,
            all: table.board().all(),
            prune: options.prune,
            order: options.order,
            stats: SearchStats::default(),
        }
    }

    /// `start` だけを訪問済みとした状態から完走できる経路数
    pub fn count_from(&mut self, start: Cell) -> u64 {
        self.count(start, Bitboard::from_cell(start))
    }

    /// (現在マス, 訪問済み集合) から全マスを回りきる延長の数
    pub fn count(&mut self, current: Cell, visited: Bitboard) -> u64 {
        self.stats.nodes += 1;

        if visited == self.all {
            self.stats.paths += 1;
            return 1;
        }

        let candidates = self.table.neighbors(current).and_not(visited);
        if candidates.is_empty() {
            self.stats.dead_ends += 1;
            return 0;
        }

        let mut total = 0;
        for (_, next) in self.ordered(candidates, visited) {
            let next_visited = visited.with(next);
            let rem = self.all.and_not(next_visited);
            if self.prune && rem.is_not_empty() && !is_connected(rem, self.table) {
                self.stats.pruned += 1;
                continue;
            }
            total += self.count(next, next_visited);
        }
        total
    }

    /// 候補を探索順に並べる
    fn ordered(&self, candidates: Bitboard, visited: Bitboard) -> CandidateList {
        let mut list: CandidateList = candidates
            .iter()
            .map(|cell| match self.order {
                CandidateOrder::RemainingDegree => {
                    (self.table.neighbors(cell).and_not(visited).count(), cell)
                }
                CandidateOrder::Index => (0, cell),
            })
            .collect();
        // 制約の強い（残り次数の小さい）マスから。行き止まりを早く見つける
        list.sort_unstable();
        list
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Board;

    fn table(rows: usize, cols: usize) -> NeighborTable {
        NeighborTable::new(Board::new(rows, cols).unwrap())
    }

    fn directed_total(table: &NeighborTable, options: &SearchOptions) -> u64 {
        let mut searcher = PathSearcher::new(table, options);
        table.board().iter_cells().map(|s| searcher.count_from(s)).sum()
    }

    #[test]
    fn test_terminal_state_counts_one() {
        let t = table(3, 4);
        let mut searcher = PathSearcher::new(&t, &SearchOptions::default());
        let all = t.board().all();
        let any = t.board().cell(0, 0).unwrap();
        assert_eq!(searcher.count(any, all), 1);
    }

    #[test]
    fn test_single_cell_board() {
        let t = table(1, 1);
        let mut searcher = PathSearcher::new(&t, &SearchOptions::default());
        assert_eq!(searcher.count_from(t.board().cell(0, 0).unwrap()), 1);
    }

    #[test]
    fn test_3x4_directed_total() {
        // 無向 8 本 = 有向 16 本
        let t = table(3, 4);
        assert_eq!(directed_total(&t, &SearchOptions::default()), 16);
    }

    #[test]
    fn test_dead_end() {
        // 3x3 の中央は跳び先がない
        let t = table(3, 3);
        let mut searcher = PathSearcher::new(&t, &SearchOptions::default());
        assert_eq!(searcher.count_from(t.board().cell(1, 1).unwrap()), 0);
        assert_eq!(searcher.stats().dead_ends, 1);
    }

    #[test]
    fn test_order_candidates_by_remaining_degree() {
        let t = table(3, 4);
        let b = t.board();
        let searcher = PathSearcher::new(&t, &SearchOptions::default());
        let start = b.cell(0, 0).unwrap();
        let visited = Bitboard::from_cell(start);
        let list = searcher.ordered(t.neighbors(start), visited);
        assert_eq!(list.len(), 2);
        assert!(list[0].0 <= list[1].0);
        for &(deg, cell) in &list {
            assert_eq!(deg, t.neighbors(cell).and_not(visited).count());
        }
    }

    #[test]
    fn test_pruning_and_order_do_not_change_count() {
        let t = table(4, 5);
        let base = directed_total(&t, &SearchOptions::default());
        assert_eq!(base, 164);
        let no_prune = SearchOptions::default().with_prune(false);
        assert_eq!(directed_total(&t, &no_prune), base);
        let by_index = SearchOptions::default().with_order(CandidateOrder::Index);
        assert_eq!(directed_total(&t, &by_index), base);
    }

    #[test]
    fn test_stats_paths_match_count() {
        let t = table(3, 4);
        let mut searcher = PathSearcher::new(&t, &SearchOptions::default());
        let total: u64 = t.board().iter_cells().map(|s| searcher.count_from(s)).sum();
        let stats = searcher.stats();
        assert_eq!(stats.paths, total);
        assert!(stats.nodes >= stats.paths);
        assert!(stats.pruned > 0);
    }
}
