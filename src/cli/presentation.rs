//! Report presentation: text and JSON renderings of a comparison result.

use crate::error::CompareError;
use crate::types::ComparisonResult;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::{OwoColorize, Stream, Style};
use std::path::Path;

/// What the text report shows and how
#[derive(Debug, Clone, Copy)]
pub struct TextReportOptions {
    pub show_same: bool,
    /// Allow colors; they are still only emitted when stdout supports them
    pub color: bool,
}

fn heading(title: &str, color: bool) -> String {
    if color {
        title
            .if_supports_color(Stream::Stdout, |t| t.style(Style::new().bold().underline()))
            .to_string()
    } else {
        title.to_string()
    }
}

fn section(out: &mut String, title: String, lines: Vec<String>) {
    if lines.is_empty() {
        return;
    }
    out.push_str(&format!("{} ({})\n", title, lines.len()));
    for line in lines {
        out.push_str(&format!("  {}\n", line));
    }
    out.push('\n');
}

/// Human-readable report: one section per non-empty classification, then a summary table.
pub fn format_text_report(
    result: &ComparisonResult,
    folder1: &Path,
    folder2: &Path,
    options: TextReportOptions,
) -> String {
    let details = &result.details;
    let color = options.color;
    let mut out = String::new();

    section(
        &mut out,
        heading(&format!("Only in {}", folder1.display()), color),
        details
            .only_in_first
            .iter()
            .map(|e| format!("{} ({} bytes)", e.path, e.size))
            .collect(),
    );
    section(
        &mut out,
        heading(&format!("Only in {}", folder2.display()), color),
        details
            .only_in_second
            .iter()
            .map(|e| format!("{} ({} bytes)", e.path, e.size))
            .collect(),
    );
    section(
        &mut out,
        heading("Different content", color),
        details
            .different_content
            .iter()
            .map(|m| {
                format!(
                    "{} ({} bytes vs {} bytes, modified {} vs {})",
                    m.path,
                    m.file1.size,
                    m.file2.size,
                    m.file1.modified_time.format("%Y-%m-%d %H:%M:%S"),
                    m.file2.modified_time.format("%Y-%m-%d %H:%M:%S"),
                )
            })
            .collect(),
    );
    if options.show_same {
        section(
            &mut out,
            heading("Same content", color),
            details
                .same_content
                .iter()
                .map(|m| format!("{} ({} bytes)", m.path, m.size))
                .collect(),
        );
    }

    let counts = &result.counts;
    out.push_str(&format!("{}\n\n", heading("Summary", color)));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Category", "Files"]);
    table.add_row(vec![
        format!("Only in {}", folder1.display()),
        counts.only_in_first.to_string(),
    ]);
    table.add_row(vec![
        format!("Only in {}", folder2.display()),
        counts.only_in_second.to_string(),
    ]);
    table.add_row(vec!["Different content".to_string(), counts.different_content.to_string()]);
    table.add_row(vec!["Same content".to_string(), counts.same_content.to_string()]);
    table.add_row(vec!["Total differences".to_string(), counts.total_differences.to_string()]);
    table.add_row(vec!["Total files".to_string(), counts.total_files.to_string()]);
    if !result.warnings.is_empty() {
        table.add_row(vec!["Warnings".to_string(), result.warnings.len().to_string()]);
    }
    out.push_str(&format!("{}\n\n", table));

    let verdict = if result.is_identical() {
        let text = "Folders are identical";
        if color {
            text.if_supports_color(Stream::Stdout, |t| t.green()).to_string()
        } else {
            text.to_string()
        }
    } else {
        let text = format!("Folders differ: {} difference(s)", counts.total_differences);
        if color {
            text.if_supports_color(Stream::Stdout, |t| t.red()).to_string()
        } else {
            text
        }
    };
    out.push_str(&verdict);
    out
}

/// Pretty-printed JSON of the whole result.
pub fn format_json_report(result: &ComparisonResult) -> Result<String, CompareError> {
    serde_json::to_string_pretty(result)
        .map_err(|e| CompareError::Config(format!("Failed to serialize report: {}", e)))
}
