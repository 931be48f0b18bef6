//! Report formatting and printing utilities.
//!
//! This module displays annotations in cargo-style format.
//! Separate from core logic to allow locdiff to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, DocumentOutput, HoverSummary, InitSummary,
};
use crate::{config::CONFIG_FILE_NAME, core::LoadWarning, issues::Severity, report::Annotation};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print annotations in cargo-style format to stdout.
pub fn report(documents: &[DocumentOutput]) {
    report_to(documents, &mut io::stdout().lock());
}

/// Print annotations to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(documents: &[DocumentOutput], writer: &mut W) {
    if documents.iter().all(|d| d.annotations.is_empty()) {
        return;
    }

    let max_line_width = calculate_max_line_width(documents);

    for document in documents {
        for annotation in &document.annotations {
            print_annotation(document, annotation, writer, max_line_width);
        }
    }

    print_summary(documents, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(documents_checked: usize) {
    print_success_to(documents_checked, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(documents_checked: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} translation {} - no issues found",
            documents_checked,
            if documents_checked == 1 {
                "file"
            } else {
                "files"
            }
        )
        .green()
    );
}

/// Print locale files that were left out of a pass.
pub fn print_load_warnings(warnings: &[LoadWarning]) {
    print_load_warnings_to(warnings, &mut io::stderr().lock());
}

pub fn print_load_warnings_to<W: Write>(warnings: &[LoadWarning], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(
            writer,
            "{} {} (locale {} skipped)",
            "warning:".bold().yellow(),
            warning.error,
            warning.locale.cyan()
        );
    }
}

/// Print a hover answer to a custom writer.
pub fn print_hover_to<W: Write>(summary: &HoverSummary, writer: &mut W) {
    let Some(hover) = &summary.hover else {
        let _ = writeln!(writer, "No warnings at {}", summary.location);
        return;
    };

    match &hover.value {
        Some(value) => {
            let _ = writeln!(writer, "{}  {}", hover.key.bold(), format!("{:?}", value).dimmed());
        }
        None => {
            let _ = writeln!(writer, "{}", hover.key.bold());
        }
    }
    let _ = writeln!(writer, "  {} {}", "-->".blue(), summary.location);
    for paragraph in hover.contents.split("\n\n") {
        let _ = writeln!(writer, "  {} {}", "=".blue(), paragraph);
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_annotation<W: Write>(
    document: &DocumentOutput,
    annotation: &Annotation,
    writer: &mut W,
    max_line_width: usize,
) {
    let start = annotation.range.start;
    let end = annotation.range.end;
    let line = start.line + 1;
    let col = start.character + 1;

    let severity_str = match annotation.severity {
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        annotation.message,
        annotation.rule.to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        document.path,
        line,
        col
    );

    let Some(source_line) = document
        .source
        .as_deref()
        .and_then(|source| source.lines().nth(start.line))
    else {
        let _ = writeln!(writer);
        return;
    };

    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        line.to_string().blue(),
        "|".blue(),
        source_line,
        width = max_line_width
    );

    let prefix: String = source_line.chars().take(start.character).collect();
    let key_name: String = if end.line == start.line {
        source_line
            .chars()
            .skip(start.character)
            .take(end.character.saturating_sub(start.character))
            .collect()
    } else {
        String::new()
    };
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let caret_count = UnicodeWidthStr::width(key_name.as_str()).max(1);
    let carets = match annotation.severity {
        Severity::Warning => "^".repeat(caret_count).yellow(),
    };
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        carets,
        width = max_line_width,
        padding = caret_padding
    );

    let _ = writeln!(writer); // Empty line between annotations
}

fn print_summary<W: Write>(documents: &[DocumentOutput], writer: &mut W) {
    let total_warnings: usize = documents.iter().map(|d| d.annotations.len()).sum();
    let file_count = documents
        .iter()
        .filter(|d| !d.annotations.is_empty())
        .count();

    if total_warnings > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}) in {} {}",
            FAILURE_MARK.red(),
            total_warnings,
            if total_warnings == 1 {
                "problem"
            } else {
                "problems"
            },
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow(),
            file_count,
            if file_count == 1 { "file" } else { "files" }
        );
    }
}

fn calculate_max_line_width(documents: &[DocumentOutput]) -> usize {
    documents
        .iter()
        .flat_map(|d| d.annotations.iter())
        .map(|a| a.range.start.line + 1)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Check(summary) => print_check(summary),
        CommandSummary::Hover(summary) => {
            print_load_warnings(&summary.load_warnings);
            print_hover_to(summary, &mut io::stdout().lock());
        }
        CommandSummary::Init(summary) => print_init(summary),
        CommandSummary::Watch => {}
    }
}

/// Print the outcome of one round of checks.
pub fn print_check(summary: &CheckSummary) {
    for path in &summary.not_translation_documents {
        eprintln!(
            "{} {} is not a translation document",
            "warning:".bold().yellow(),
            path
        );
    }
    print_load_warnings(&summary.load_warnings);

    if summary.documents.is_empty() {
        print_success(summary.documents_checked);
    } else {
        report(&summary.documents);
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
