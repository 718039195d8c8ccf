//! CLI route: run context. Loads configuration, applies flags, runs the engine and renders.

use crate::config::{CompareConfig, DirCompareConfig};
use crate::diagnostics::TracingSink;
use crate::engine::{compare_directories_collecting, validate_root};
use crate::error::CompareError;
use tracing::info;

use crate::cli::output::exit_code;
use crate::cli::parse::{Cli, ReportFormat};
use crate::cli::presentation::{format_json_report, format_text_report, TextReportOptions};

/// What the binary prints and how it exits
#[derive(Debug)]
pub struct RunOutcome {
    pub output: String,
    pub exit_code: i32,
}

/// Runtime context for CLI execution, holding the configuration loaded by the binary.
pub struct RunContext {
    config: DirCompareConfig,
}

impl RunContext {
    /// Create run context from an already loaded configuration.
    pub fn with_config(config: DirCompareConfig) -> Self {
        Self { config }
    }

    /// Validate both folders, compare them and render the report.
    pub fn execute(&self, cli: &Cli) -> Result<RunOutcome, CompareError> {
        validate_root(&cli.folder1)?;
        validate_root(&cli.folder2)?;

        let compare = apply_overrides(&self.config.compare, cli);
        compare.validate().map_err(CompareError::Config)?;

        info!(
            folder1 = %cli.folder1.display(),
            folder2 = %cli.folder2.display(),
            "Comparing folders"
        );
        let result = compare_directories_collecting(
            &cli.folder1,
            &cli.folder2,
            &compare.to_options(),
            &TracingSink,
        )?;

        let output = match cli.format {
            ReportFormat::Json => format_json_report(&result)?,
            ReportFormat::Text => format_text_report(
                &result,
                &cli.folder1,
                &cli.folder2,
                TextReportOptions {
                    show_same: cli.show_same,
                    color: !cli.no_color,
                },
            ),
        };

        Ok(RunOutcome {
            output,
            exit_code: exit_code(&result),
        })
    }
}

/// Fold command-line flags over the configured comparison settings.
fn apply_overrides(base: &CompareConfig, cli: &Cli) -> CompareConfig {
    let mut compare = base.clone();
    if cli.workers.is_some() {
        compare.workers = cli.workers;
    }
    if cli.no_size_short_circuit {
        compare.size_short_circuit = false;
    }
    if cli.no_follow_symlinks {
        compare.follow_symlinks = false;
    }
    compare.ignore_patterns.extend(cli.ignore.iter().cloned());
    compare
}
