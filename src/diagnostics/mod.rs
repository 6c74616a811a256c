//! Terminal error reporting for the Tern CLI.
//!
//! Renders `RunError`s as annotated source reports with [`ariadne`],
//! falling back to plain `eprintln` output when a report cannot be
//! rendered.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::driver::RunError;

/// Prints an ariadne report for a byte range in the source.
fn print_range_report(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    short_message: &str,
    label_message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(short_message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(label_message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

/// Returns a 1-byte range at the very end of the source, used for errors
/// that carry no span of their own.
fn end_of_source_range(source: &str) -> Range<usize> {
    if source.is_empty() {
        0..0
    } else {
        let end = source.len().saturating_sub(1);
        end..source.len()
    }
}

/// Clamps a span's byte range to the source length.
///
/// The Eof token's span sits one past the last byte; ariadne needs a
/// range that touches real input.
fn clamped_range(start: usize, end: usize, source: &str) -> Range<usize> {
    if start >= source.len() {
        end_of_source_range(source)
    } else {
        start..end.min(source.len()).max(start + 1)
    }
}

fn report_spanned_error(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    short_message: &str,
    label_message: &str,
    line: usize,
    column: usize,
) {
    if let Err(report_err) = print_range_report(
        filename,
        source,
        span_range,
        short_message,
        label_message,
    ) {
        eprintln!("Error: {} (at {}:{})", label_message, line, column);
        eprintln!("(Failed to display detailed error report: {})", report_err);
    }
}

/// Reports a run error to stderr.
pub(crate) fn report_error(filename: &str, source: &str, error: &RunError) {
    match error {
        RunError::FileRead { .. } => {
            eprintln!("Error: {}", error);
        }
        RunError::Lex(e) => {
            let span = e.span();
            report_spanned_error(
                filename,
                source,
                clamped_range(span.start, span.end, source),
                e.short_message(),
                e.message(),
                span.line,
                span.column,
            );
        }
        RunError::Parse(e) => {
            let span = e.span();
            report_spanned_error(
                filename,
                source,
                clamped_range(span.start, span.end, source),
                e.short_message(),
                e.message(),
                span.line,
                span.column,
            );
        }
        RunError::Runtime(e) => match e.span() {
            Some(span) => {
                report_spanned_error(
                    filename,
                    source,
                    clamped_range(span.start, span.end, source),
                    e.short_message(),
                    e.message(),
                    span.line,
                    span.column,
                );
            }
            None => {
                if let Err(report_err) = print_range_report(
                    filename,
                    source,
                    end_of_source_range(source),
                    e.short_message(),
                    e.message(),
                ) {
                    eprintln!("Error in {}: {}", filename, e.message());
                    eprintln!("(Failed to display detailed error report: {})", report_err);
                }
            }
        },
    }
}
