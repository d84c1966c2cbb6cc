//! Error adapter for converting GridsketchError to miette diagnostics.
//!
//! This module bridges the library's error type and miette's report
//! formatting. Scene decoding errors point at the offending position in the
//! scene text; every other error is reported with its diagnostic code only.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, SourceSpan};

use gridsketch::GridsketchError;

/// Adapter giving a [`GridsketchError`] a miette [`Diagnostic`] view
pub struct ErrorAdapter<'a>(pub &'a GridsketchError);

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
        match self.0 {
            // The message already embeds the serde error.
            GridsketchError::Json { .. } => None,
            err => std::error::Error::source(err),
        }
    }
}

impl Diagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            GridsketchError::Io(_) => "gridsketch::io",
            GridsketchError::Json { .. } => "gridsketch::json",
            GridsketchError::WorkspaceNotFound(_) | GridsketchError::ShapeNotFound { .. } => {
                "gridsketch::session"
            }
            GridsketchError::Config(_) => "gridsketch::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            GridsketchError::Json { .. } => Some(Box::new(
                "a scene is a JSON array of shapes, or an object with a `shapes` array",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.0 {
            GridsketchError::Json { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let GridsketchError::Json { err, src } = self.0 else {
            return None;
        };
        let span = json_error_span(err, src)?;
        let label = LabeledSpan::new_primary_with_span(Some("here".to_string()), span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Converts serde_json's one-based line and column into a byte span of `src`.
///
/// Returns `None` when the error carries no position.
fn json_error_span(err: &serde_json::Error, src: &str) -> Option<SourceSpan> {
    if err.line() == 0 {
        return None;
    }

    let line_start: usize = src
        .split_inclusive('\n')
        .take(err.line() - 1)
        .map(str::len)
        .sum();
    let offset = (line_start + err.column().saturating_sub(1)).min(src.len());
    let len = src[offset..].chars().next().map_or(0, char::len_utf8);
    Some(SourceSpan::new(offset.into(), len))
}
