//! dircompare CLI Binary
//!
//! Compares two directory trees and exits 0 when they are equivalent,
//! 1 when they differ and 2 on usage or configuration errors.

use clap::Parser;
use dircompare::cli::{map_error, Cli, RunContext, EXIT_ERROR};
use dircompare::config::ConfigLoader;
use dircompare::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{debug, error};

fn main() {
    // clap exits with status 2 on usage errors
    let cli = Cli::parse();

    // Loaded once; logging is not up yet, so failures go straight to stderr
    let loaded = match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path),
        None => ConfigLoader::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(EXIT_ERROR);
        }
    };

    let logging_config = build_logging_config(&cli, &config.logging);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(EXIT_ERROR);
    }

    debug!("dircompare starting");

    let context = RunContext::with_config(config);

    match context.execute(&cli) {
        Ok(outcome) => {
            println!("{}", outcome.output);
            process::exit(outcome.exit_code);
        }
        Err(e) => {
            error!("Comparison failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(EXIT_ERROR);
        }
    }
}

/// Build logging configuration from CLI args over the loaded configuration.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, base: &LoggingConfig) -> LoggingConfig {
    let mut config = base.clone();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }
    if cli.no_color {
        config.color = false;
    }

    config
}
