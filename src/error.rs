//! Error types for daylink

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for daylink
#[derive(Debug, Error)]
pub enum DaylinkError {
    #[error("invalid note series: {0}")]
    InvalidSeries(String),

    #[error("search window must be positive, got {0}")]
    InvalidWindow(i64),

    #[error("directory does not exist: {0}")]
    DirectoryNotFound(PathBuf),

    /// No note file within the search window. `direction` selects the wording.
    #[error("{}", not_found_message(.series, .date, .window_days, .direction))]
    NoteNotFound {
        series: String,
        date: String,
        window_days: i64,
        direction: SearchDirection,
    },

    #[error("invalid date in filename: {0}")]
    DateParse(String),

    #[error("failed to find {stage} note: {source}")]
    Resolution {
        stage: &'static str,
        #[source]
        source: Box<DaylinkError>,
    },

    #[error("link is not eligible for resolution: {0}")]
    NotFixable(String),

    #[error("file does not exist: {0}")]
    FileNotFound(PathBuf),

    #[error("cannot determine note series from path: {0}")]
    UnknownSeriesPath(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Which way the note finder walks the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Backward,
    Forward,
}

fn not_found_message(
    series: &str,
    date: &str,
    window_days: &i64,
    direction: &SearchDirection,
) -> String {
    match direction {
        SearchDirection::Backward => format!(
            "no {} note found for {} or within {} days before",
            series, date, window_days
        ),
        SearchDirection::Forward => format!(
            "no {} note found after {} within {} days",
            series, date, window_days
        ),
    }
}

impl DaylinkError {
    /// Wrap a finder error with the resolution stage it came from
    pub fn resolution(stage: &'static str, source: DaylinkError) -> Self {
        DaylinkError::Resolution {
            stage,
            source: Box::new(source),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DaylinkError::FileNotFound(_) => 2,
            DaylinkError::UnknownSeriesPath(_) | DaylinkError::DateParse(_) => 3,
            DaylinkError::Config(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DaylinkError::UnknownSeriesPath(path) => {
                format!(
                    "Cannot determine note series from path: {}\n\n\
                    Suggestions:\n\
                    • Keep notes under a 'journal' or 'standup' directory\n\
                    • Example: notes/journal/2025-01-08.md",
                    path.display()
                )
            }
            DaylinkError::DateParse(name) => {
                format!(
                    "Invalid date in filename: '{}'\n\n\
                    Note files must be named YYYY-MM-DD.md (e.g., 2025-01-08.md)",
                    name
                )
            }
            DaylinkError::Config(msg) => {
                if msg.contains("search_window_days") {
                    format!(
                        "{}\n\n\
                        Example: search_window_days = 30\n\
                        Or set DAYLINK_SEARCH_WINDOW_DAYS=30",
                        msg
                    )
                } else {
                    format!(
                        "{}\n\n\
                        Run 'daylink generate-config' to create a sample .daylink.toml",
                        msg
                    )
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DaylinkError
pub type Result<T> = std::result::Result<T, DaylinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backward_not_found_message() {
        let err = DaylinkError::NoteNotFound {
            series: "journal".to_string(),
            date: "2025-03-01".to_string(),
            window_days: 30,
            direction: SearchDirection::Backward,
        };
        assert_eq!(
            err.to_string(),
            "no journal note found for 2025-03-01 or within 30 days before"
        );
    }

    #[test]
    fn test_forward_not_found_message() {
        let err = DaylinkError::NoteNotFound {
            series: "standup".to_string(),
            date: "2025-01-13".to_string(),
            window_days: 7,
            direction: SearchDirection::Forward,
        };
        assert_eq!(
            err.to_string(),
            "no standup note found after 2025-01-13 within 7 days"
        );
    }

    #[test]
    fn test_resolution_wraps_source() {
        let err = DaylinkError::resolution(
            "previous",
            DaylinkError::DirectoryNotFound(PathBuf::from("/nope")),
        );
        assert_eq!(
            err.to_string(),
            "failed to find previous note: directory does not exist: /nope"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unknown_series_suggestions() {
        let err = DaylinkError::UnknownSeriesPath(PathBuf::from("notes/2025-01-08.md"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("Suggestions"));
        assert!(msg.contains("journal"));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_config_window_suggestions() {
        let err = DaylinkError::Config("search_window_days must be positive, got 0".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("DAYLINK_SEARCH_WINDOW_DAYS"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = DaylinkError::InvalidWindow(0);
        assert_eq!(
            err.display_with_suggestions(),
            "search window must be positive, got 0"
        );
        assert_eq!(err.exit_code(), 1);
    }
}
