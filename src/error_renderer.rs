//! Error rendering using ariadne
//!
//! This module provides utilities for rendering evaluation errors with
//! source snippets and annotations pointing at the offending input.

use crate::{Diagnostic, EvaluationError, Severity, ValidationError};
use ariadne::{ColorGenerator, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;
use std::ops::Range;

const SOURCE_ID: &str = "<input>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use reckon::{evaluate, render_error};
///
/// let source = "2 + * 3";
/// if let Err(e) = evaluate(source) {
///     render_error(source, &e);
/// }
/// ```
pub fn render_error(source: &str, error: &EvaluationError) {
    render_error_to_writer(source, error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
///
/// This is useful when you want to control where the error is written,
/// such as to a file, a buffer, or a custom output stream.
pub fn render_error_to(
    source: &str,
    error: &EvaluationError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    render_error_to_writer(source, error, writer, use_color)
}

/// Render an error to a String (useful for logs, web UIs, etc.)
pub fn render_error_to_string(source: &str, error: &EvaluationError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
///
/// This is the same as `render_error_to_string` but without ANSI color codes,
/// making the output easier to compare in tests.
pub fn render_error_to_string_no_color(source: &str, error: &EvaluationError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render a rejected request.
///
/// An evaluation failure is rendered against `source` like [`render_error`];
/// other validation messages are listed one per line with their field.
pub fn render_validation_error_to(
    source: Option<&str>,
    error: &ValidationError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    if let (Some(source), Some(evaluation)) = (source, &error.evaluation) {
        return render_error_to_writer(source, evaluation, writer, use_color);
    }

    for (field, messages) in &error.errors {
        for message in messages {
            writeln!(writer, "Error: {} ({})", message, field)?;
        }
    }
    Ok(())
}

fn render_error_to_writer(
    source: &str,
    error: &EvaluationError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let diagnostic = error.to_diagnostic();
    match label_range(source, &diagnostic) {
        Some(range) => render_diagnostic(source, &diagnostic, range, writer, use_color),
        None => render_plain(&diagnostic, writer),
    }
}

/// Byte range to underline, or `None` when there is nothing to point at.
///
/// An empty span at the very end of the input is widened onto the last
/// character so the label lands on a visible line.
fn label_range(source: &str, diagnostic: &Diagnostic) -> Option<Range<usize>> {
    let span = diagnostic.span.as_ref()?;
    if source.trim().is_empty() {
        return None;
    }

    let start = span.start().min(source.len());
    let end = span.end().min(source.len());
    if start < end {
        return Some(start..end);
    }

    let trimmed_end = source.trim_end().len();
    if start >= trimmed_end {
        let last = source[..trimmed_end]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        return Some(last..trimmed_end);
    }
    Some(start..start)
}

fn render_plain(diagnostic: &Diagnostic, writer: &mut dyn Write) -> std::io::Result<()> {
    match &diagnostic.code {
        Some(code) => writeln!(writer, "[{}] Error: {}", code, diagnostic.message)?,
        None => writeln!(writer, "Error: {}", diagnostic.message)?,
    }
    if let Some(help) = &diagnostic.help {
        writeln!(writer, "Help: {}", help)?;
    }
    Ok(())
}

fn render_diagnostic(
    source: &str,
    diagnostic: &Diagnostic,
    range: Range<usize>,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let kind = match diagnostic.severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Info => ReportKind::Advice,
    };

    let mut report = Report::build(kind, (SOURCE_ID, range.clone()))
        .with_message(&diagnostic.message)
        .with_config(
            ariadne::Config::default()
                .with_color(use_color)
                .with_index_type(IndexType::Byte),
        );

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code);
    }

    let color = colors.next();
    report = report.with_label(
        Label::new((SOURCE_ID, range))
            .with_message(&diagnostic.message)
            .with_color(color),
    );

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report.finish().write((SOURCE_ID, Source::from(source)), writer)
}
