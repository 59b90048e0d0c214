//! CLI argument definitions for the collation tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lxx-collate",
    version,
    about = "Collate a Brenton Septuagint text against reference editions",
    long_about = "Scan a Brenton TeX source for Greek words absent from the\n\
                  Rahlfs and Swete reference corpora, and classify each one:\n\
                  a reviewed correction, an accepted spelling, a legitimate\n\
                  orthographic variation, a likely typo, or unexplained."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan a source file and classify its missing words.
    Check(CheckArgs),

    /// List the recognized book headings and their canonical codes.
    Books,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the Brenton TeX source file.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Rahlfs word list (word_id TAB word).
    #[arg(long = "rahlfs-words", value_name = "PATH")]
    pub rahlfs_words: PathBuf,

    /// Rahlfs versification table (verse ref TAB starting word id).
    #[arg(long = "rahlfs-verses", value_name = "PATH")]
    pub rahlfs_verses: PathBuf,

    /// Swete word list. The Swete corpus is optional; without it only
    /// Rahlfs is consulted.
    #[arg(long = "swete-words", value_name = "PATH", requires = "swete_verses")]
    pub swete_words: Option<PathBuf>,

    /// Swete versification table.
    #[arg(long = "swete-verses", value_name = "PATH", requires = "swete_words")]
    pub swete_verses: Option<PathBuf>,

    /// Reviewed accepted-words list (one word per line).
    #[arg(long = "accepted-words", value_name = "PATH")]
    pub accepted_words: Option<PathBuf>,

    /// Reviewed corrections table (verse TAB wrong TAB corrected).
    #[arg(long = "corrections", value_name = "PATH")]
    pub corrections: Option<PathBuf>,

    /// Report output path (default: <SOURCE>.report.tsv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Skip the fuzzy similarity stages entirely.
    #[arg(long = "no-fuzzy")]
    pub no_fuzzy: bool,

    /// Skip the whole-corpus fuzzy stage (keep verse and area fuzzy).
    #[arg(long = "no-corpus-scan")]
    pub no_corpus_scan: bool,

    /// Classify and summarize without writing the report file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
