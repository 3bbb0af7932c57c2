//! CLI definitions for blocklog
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "blocklog")]
#[command(about = "Scrape node block logs and score steady-state transaction throughput")]
#[command(
    long_about = "blocklog - Scrape \"Received block\" lines from a node log and score throughput.

blocklog reads a node's log (plain or .gz), extracts one record per received
block, totals the blocks inside the benchmark's block range, trims setup,
teardown and ramp blocks, and reports transactions per two-block window.

QUICK START:
    blocklog score stderr.txt              Throughput statistics
    blocklog score stderr.txt --export     Also write data.json
    blocklog summary stderr.txt.gz         Chain totals for the run
    blocklog blocks stderr.txt -s          Dump steady-state blocks

Defaults for block range and trimming are read from ~/.config/blocklog/config.toml."
)]
#[command(version = crate::version())]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that scrapes a log.
#[derive(Args, Debug, Clone)]
pub struct ScrapeArgs {
    /// Node log file (.gz is decompressed automatically)
    #[arg(help = "Node log file (.gz is decompressed automatically)")]
    pub log: PathBuf,
    /// First block counted in chain totals
    #[arg(long, value_name = "BLOCK", help = "First block counted in chain totals [default: 2]")]
    pub start_block: Option<u64>,
    /// Last block counted in chain totals
    #[arg(
        long,
        value_name = "BLOCK",
        help = "Last block counted in chain totals [default: block lines + 1]"
    )]
    pub cease_block: Option<u64>,
    /// Fail on block lines in an unknown format
    #[arg(long, help = "Fail on block lines in an unknown format instead of skipping them")]
    pub strict: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score steady-state throughput of a benchmark run
    #[command(long_about = "Score steady-state throughput of a benchmark run.

The log is pruned to its steady state (setup/teardown blocks, empty ramp
blocks and --drop extra blocks removed from each end), then every pair of
consecutive blocks is treated as one window. Reports min, max, average and
standard deviation of transactions per window, the number of windows that
start on an empty block, and the number of steady-state blocks.

EXAMPLES:
    blocklog score stderr.txt
    blocklog score stderr.txt --drop 2 --json
    blocklog score stderr.txt --export results/data.json --node-bin ./bin/nodeos")]
    Score {
        #[command(flatten)]
        scrape: ScrapeArgs,
        /// Extra blocks to drop from each end of the steady state
        #[arg(
            long,
            short,
            value_name = "N",
            help = "Extra blocks dropped from each end of the steady state"
        )]
        drop: Option<usize>,
        /// Print statistics as JSON
        #[arg(long, help = "Print statistics as JSON")]
        json: bool,
        /// Write a JSON report (default path from config: data.json)
        #[arg(
            long,
            value_name = "PATH",
            num_args = 0..=1,
            help = "Write a JSON report [default: data.json]"
        )]
        export: Option<Option<PathBuf>>,
        /// Node binary queried with --version for the report
        #[arg(long, value_name = "PATH", help = "Node binary queried with --version for the report")]
        node_bin: Option<PathBuf>,
    },

    /// Show chain totals for the in-range blocks of a log
    Summary {
        #[command(flatten)]
        scrape: ScrapeArgs,
    },

    /// List the block records found in a log
    Blocks {
        #[command(flatten)]
        scrape: ScrapeArgs,
        /// Only list the steady-state blocks
        #[arg(long, short, help = "Only list the steady-state blocks")]
        steady_state: bool,
        /// Extra blocks to drop from each end (with --steady-state)
        #[arg(
            long,
            short,
            value_name = "N",
            requires = "steady_state",
            help = "Extra blocks dropped from each end (with --steady-state)"
        )]
        drop: Option<usize>,
        /// Print one JSON object per block
        #[arg(long, help = "Print one JSON object per block")]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum, help = "Shell to generate completions for")]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Open configuration in editor
    Edit,
}
