//! 計数結果の出力
//!
//! text は `A(k, n) = count` の1行、json は1盤面1行のオブジェクト。

use std::time::Duration;

use clap::ValueEnum;
use knightpath_core::{CountReport, SearchStats};
use serde::Serialize;

/// 出力形式
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// 1盤面分の出力行
#[derive(Clone, Debug, Serialize)]
pub struct BoardLine {
    pub rows: usize,
    pub cols: usize,
    pub count: u64,
    pub elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SearchStats>,
}

impl BoardLine {
    pub fn new(report: &CountReport, elapsed: Duration, verbose: bool) -> Self {
        Self {
            rows: report.board.rows(),
            cols: report.board.cols(),
            count: report.count,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            stats: verbose.then_some(report.stats),
        }
    }

    pub fn render(&self, format: Format, show_time: bool) -> serde_json::Result<String> {
        match format {
            Format::Json => serde_json::to_string(self),
            Format::Text => Ok(self.render_text(show_time)),
        }
    }

    fn render_text(&self, show_time: bool) -> String {
        let mut line = format!("A({}, {}) = {}", self.rows, self.cols, self.count);
        if show_time {
            line.push_str(&format!("  ({:.3}s)", self.elapsed_ms / 1000.0));
        }
        if let Some(stats) = &self.stats {
            line.push_str(&format!(
                "  nodes={} pruned={} dead_ends={}",
                stats.nodes, stats.pruned, stats.dead_ends
            ));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(stats: Option<SearchStats>) -> BoardLine {
        BoardLine {
            rows: 3,
            cols: 4,
            count: 8,
            elapsed_ms: 1500.0,
            stats,
        }
    }

    #[test]
    fn test_text() {
        assert_eq!(line(None).render(Format::Text, false).unwrap(), "A(3, 4) = 8");
        assert_eq!(
            line(None).render(Format::Text, true).unwrap(),
            "A(3, 4) = 8  (1.500s)"
        );
    }

    #[test]
    fn test_text_verbose() {
        let stats = SearchStats {
            nodes: 100,
            pruned: 7,
            dead_ends: 2,
            paths: 8,
        };
        let text = line(Some(stats)).render(Format::Text, false).unwrap();
        assert_eq!(text, "A(3, 4) = 8  nodes=100 pruned=7 dead_ends=2");
    }

    #[test]
    fn test_json() {
        let json = line(None).render(Format::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rows"], 3);
        assert_eq!(value["cols"], 4);
        assert_eq!(value["count"], 8);
        assert!(value.get("stats").is_none());
    }
}
