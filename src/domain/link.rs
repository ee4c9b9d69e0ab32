//! Raw markdown links and destination-shape helpers

use crate::domain::finder::is_date_shape;
use crate::domain::NoteSeries;
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Bare `YYYY-MM-DD` with optional `.md`
fn bare_date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}(\.md)?$").unwrap())
}

/// Relative path ending in `../<dir>/YYYY-MM-DD` with optional `.md`
fn relative_date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\.\./[^/]+/\d{4}-\d{2}-\d{2}(\.md)?$").unwrap())
}

/// A link as written in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLink {
    /// Display text between `[` and `]`
    pub text: String,
    /// Destination between `(` and `)`
    pub destination: String,
    /// 1-based line number, for display only
    pub line: usize,
    /// Byte range of the whole link in the source document, when parsed from one
    pub span: Option<Range<usize>>,
}

impl RawLink {
    pub fn new(text: impl Into<String>, destination: impl Into<String>) -> Self {
        RawLink {
            text: text.into(),
            destination: destination.into(),
            line: 0,
            span: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn with_span(mut self, span: Range<usize>) -> Self {
        self.span = Some(span);
        self
    }

    /// Destination carries a URI scheme (`https://…`, `file://…`)
    pub fn is_external(&self) -> bool {
        self.destination.contains("://")
    }

    /// Destination looks like a reference to a daily note
    pub fn is_date_link(&self) -> bool {
        bare_date_regex().is_match(&self.destination)
            || relative_date_regex().is_match(&self.destination)
    }

    /// Series named by the destination path, if any
    pub fn series_from_destination(&self) -> Option<NoteSeries> {
        let dest = self.destination.to_lowercase();

        NoteSeries::ALL.into_iter().find(|series| {
            let name = series.as_str();
            dest.contains(&format!("/{}/", name)) || dest.starts_with(&format!("{}/", name))
        })
    }

    /// The `YYYY-MM-DD` date named by the destination's final path component
    pub fn date_from_destination(&self) -> Option<&str> {
        let leaf = self
            .destination
            .rsplit('/')
            .next()
            .unwrap_or(&self.destination);

        leaf.get(..10).filter(|prefix| is_date_shape(prefix))
    }
}
