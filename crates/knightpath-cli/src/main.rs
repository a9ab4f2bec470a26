//! knightpath - k×n 盤の桂馬跳びハミルトン路を数える
//!
//! 行数・列数の範囲の直積を順に数え、1盤面ごとに1行出力する。
//!
//! # 使用例
//!
//! ```bash
//! # 9行盤の 1〜4 列
//! cargo run --release -p knightpath-cli -- --rows 9 --cols 1..5
//!
//! # 正方形盤を JSON で、所要時間と探索統計つき
//! cargo run --release -p knightpath-cli -- \
//!   --rows 5..=6 --cols 5..=6 --format json --verbose
//!
//! # 枝刈りなし・番号順（検証用）
//! cargo run --release -p knightpath-cli -- \
//!   --rows 4 --cols 5 --no-prune --order index --symmetry full
//! ```

mod range;
mod report;

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use knightpath_core::{CandidateOrder, PathCounter, SearchOptions, SymmetryMode};
use range::DimRange;
use report::{BoardLine, Format};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    /// 残り次数の昇順（Warnsdorff 則）
    Degree,
    /// マス番号の昇順
    Index,
}

impl From<OrderArg> for CandidateOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Degree => CandidateOrder::RemainingDegree,
            OrderArg::Index => CandidateOrder::Index,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SymmetryArg {
    /// 正方形は全マス、長方形は180度回転の代表元
    Auto,
    /// 全マスから探索
    Full,
    /// 常に180度回転の代表元
    HalfTurn,
}

impl From<SymmetryArg> for SymmetryMode {
    fn from(arg: SymmetryArg) -> Self {
        match arg {
            SymmetryArg::Auto => SymmetryMode::Auto,
            SymmetryArg::Full => SymmetryMode::Full,
            SymmetryArg::HalfTurn => SymmetryMode::HalfTurn,
        }
    }
}

/// k×n 盤の桂馬跳びハミルトン路を数える
#[derive(Parser, Debug)]
#[command(name = "knightpath", version, about, long_about = None)]
struct Cli {
    /// 行数 k（N, A..B, A..=B）
    #[arg(short = 'k', long)]
    rows: DimRange,

    /// 列数 n（N, A..B, A..=B）
    #[arg(short = 'n', long)]
    cols: DimRange,

    /// ワーカースレッド数（省略時は論理CPU数）
    #[arg(short, long)]
    threads: Option<usize>,

    /// 残りマスの連結判定による枝刈りを無効化
    #[arg(long)]
    no_prune: bool,

    /// 候補の並べ方
    #[arg(long, value_enum, default_value_t = OrderArg::Degree)]
    order: OrderArg,

    /// 開始マスの対称性削減
    #[arg(long, value_enum, default_value_t = SymmetryArg::Auto)]
    symmetry: SymmetryArg,

    /// 出力形式
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// text 出力に所要時間を付ける
    #[arg(long)]
    time: bool,

    /// 探索統計を出力する
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn search_options(&self) -> SearchOptions {
        SearchOptions {
            prune: !self.no_prune,
            order: self.order.into(),
            symmetry: self.symmetry.into(),
            threads: self.threads,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    let options = cli.search_options();
    log::debug!("rows={} cols={} options={options:?}", cli.rows, cli.cols);
    let counter = PathCounter::new(options);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for rows in cli.rows.iter() {
        for cols in cli.cols.iter() {
            let start = Instant::now();
            let report = counter
                .count(rows, cols)
                .with_context(|| format!("failed to count {rows}x{cols} board"))?;
            let line = BoardLine::new(&report, start.elapsed(), cli.verbose);
            writeln!(out, "{}", line.render(cli.format, cli.time)?)?;
            // 大きな盤は時間がかかるので、1行ずつ確定させる
            out.flush()?;
        }
    }
    Ok(())
}
