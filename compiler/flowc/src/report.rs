//! Diagnostic rendering with `ariadne`.

use std::io::{self, IsTerminal};
use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::FlowError;

/// Render `err` against `source`. Errors without a span render as a single
/// line.
pub fn render(err: &FlowError, path: &str, source: &str, color: bool) -> String {
    let message = err.to_string();
    let Some(span) = err.span() else {
        return format!("error: {message}\n");
    };
    let range = clamp(span.to_range(), source.len());

    let report = Report::build(ReportKind::Error, path, range.start)
        .with_config(Config::default().with_color(color))
        .with_message(&message)
        .with_label(
            Label::new((path, range))
                .with_message(err.label())
                .with_color(Color::Red),
        )
        .finish();

    let mut buf = Vec::new();
    if report.write((path, Source::from(source)), &mut buf).is_err() {
        return format!("error: {message}\n");
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Print `err` to stderr, colored when stderr is a terminal.
pub fn emit(err: &FlowError, path: &str, source: &str) {
    let color = io::stderr().is_terminal();
    eprint!("{}", render(err, path, source, color));
}

fn clamp(range: Range<usize>, len: usize) -> Range<usize> {
    let start = range.start.min(len);
    start..range.end.clamp(start, len)
}
