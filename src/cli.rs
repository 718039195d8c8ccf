//! CLI domain: parse, route, output, and presentation only.
//! No comparison logic; the route hands off to the engine.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{exit_code, map_error, EXIT_DIFFERENT, EXIT_ERROR, EXIT_IDENTICAL};
pub use parse::{Cli, ReportFormat};
pub use presentation::{format_json_report, format_text_report, TextReportOptions};
pub use route::{RunContext, RunOutcome};
