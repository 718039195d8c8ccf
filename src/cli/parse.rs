//! CLI parse: clap types for dircompare. No behavior; definitions only.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

/// dircompare - Compare two directory trees file by file
#[derive(Debug, Parser)]
#[command(name = "dircompare")]
#[command(about = "Recursively compare two directory trees by relative path and content")]
pub struct Cli {
    /// First folder
    pub folder1: PathBuf,

    /// Second folder
    pub folder2: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Also list files whose content is identical
    #[arg(long)]
    pub show_same: bool,

    /// Worker threads for traversal and content reads (default: one per core)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Always read file content, even when sizes differ
    #[arg(long)]
    pub no_size_short_circuit: bool,

    /// Do not follow symbolic links
    #[arg(long)]
    pub no_follow_symlinks: bool,

    /// Skip entries with this name on both sides (repeatable)
    #[arg(long = "ignore", value_name = "NAME")]
    pub ignore: Vec<String>,

    /// Disable colored text output
    #[arg(long)]
    pub no_color: bool,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely, warnings included
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
