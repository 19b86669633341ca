//! Error adapter for converting StemmaError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Parse errors are
//! rendered with a snippet of the offending JSON input.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use stemma::StemmaError;

/// Adapter for a JSON parse error with its source text.
pub struct ParseErrorAdapter<'a> {
    err: &'a serde_json::Error,
    src: &'a str,
}

impl<'a> ParseErrorAdapter<'a> {
    /// Create a new parse error adapter.
    pub fn new(err: &'a serde_json::Error, src: &'a str) -> Self {
        Self { err, src }
    }

    /// Span of the position reported by the JSON parser.
    fn span(&self) -> SourceSpan {
        let offset = line_column_to_offset(self.src, self.err.line(), self.err.column());
        let len = usize::from(offset < self.src.len());
        SourceSpan::new(offset.into(), len)
    }
}

impl fmt::Debug for ParseErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseErrorAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ParseErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid revision list")
    }
}

impl std::error::Error for ParseErrorAdapter<'_> {}

impl MietteDiagnostic for ParseErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("stemma::parse"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "expected a JSON array of objects with integer `id`, `version` and `forkedFrom` fields",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_primary_with_span(Some(strip_position(self.err)), self.span());
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for non-diagnostic [`StemmaError`] variants.
///
/// This adapter handles errors that don't carry source text, such as I/O
/// errors, configuration errors, and export errors.
pub struct ErrorAdapter<'a>(pub &'a StemmaError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            StemmaError::Io(_) => "stemma::io",
            StemmaError::Parse { .. } => "stemma::parse",
            StemmaError::Config(_) => "stemma::config",
            StemmaError::Export(_) => "stemma::export",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a parse diagnostic or a non-diagnostic error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parse error with source location information.
    Diagnostic(ParseErrorAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diagnostic(d) => fmt::Display::fmt(d, f),
            Self::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Diagnostic(_) => None,
            Self::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Self::Diagnostic(d) => d.code(),
            Self::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Self::Diagnostic(d) => d.help(),
            Self::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Self::Diagnostic(d) => d.source_code(),
            Self::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Self::Diagnostic(d) => d.labels(),
            Self::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`StemmaError`] into renderable miette diagnostics.
pub fn to_reportables(err: &StemmaError) -> Vec<Reportable<'_>> {
    match err {
        StemmaError::Parse { err, src } => {
            vec![Reportable::Diagnostic(ParseErrorAdapter::new(err, src))]
        }
        other => vec![Reportable::Error(ErrorAdapter(other))],
    }
}

/// Byte offset of a 1-based line and column, clamped to the source length.
fn line_column_to_offset(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(src.len())
}

/// The JSON error message without its trailing "at line X column Y".
fn strip_position(err: &serde_json::Error) -> String {
    let message = err.to_string();
    match message.rfind(" at line ") {
        Some(index) => message[..index].to_string(),
        None => message,
    }
}
