use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// wordfreq - Chinese word-frequency analysis
#[derive(Parser)]
#[command(name = "wordfreq", version, about)]
pub struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, env = "WORDFREQ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Count words in a text and optionally build a chart.
    Analyze(AnalyzeCommand),
    /// List the supported chart kinds.
    Kinds,
    /// Print the effective configuration as TOML.
    Config,
}

/// Segmentation strategy.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TokenizerKind {
    /// Dictionary segmentation with the embedded CC-CEDICT lexicon.
    Lindera,
    /// Split on whitespace (for pre-segmented text).
    Whitespace,
}

// --- Analyze ---

#[derive(Parser)]
pub struct AnalyzeCommand {
    /// Text file holding the article. Reads stdin when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Chart kind (e.g. 柱状图, bar, 饼图, pie). See `wordfreq kinds`.
    #[arg(long, conflicts_with = "interactive")]
    pub chart: Option<String>,

    /// Choose the chart kind from a menu.
    #[arg(long)]
    pub interactive: bool,

    /// Number of top words to show and chart.
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Segmentation strategy.
    #[arg(long, value_enum, default_value_t = TokenizerKind::Lindera)]
    pub tokenizer: TokenizerKind,

    /// Write the chart specification to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}
