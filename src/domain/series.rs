//! Note series definitions

use crate::error::{DaylinkError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The two parallel collections of daily notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSeries {
    /// Daily journal entries
    Journal,
    /// Daily standup notes
    Standup,
}

impl NoteSeries {
    pub const ALL: [NoteSeries; 2] = [NoteSeries::Journal, NoteSeries::Standup];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteSeries::Journal => "journal",
            NoteSeries::Standup => "standup",
        }
    }

    /// The other series (journal <-> standup)
    pub fn opposite(&self) -> NoteSeries {
        match self {
            NoteSeries::Journal => NoteSeries::Standup,
            NoteSeries::Standup => NoteSeries::Journal,
        }
    }

    /// Determine the series of a note file from its path.
    ///
    /// Any path component equal to `journal` or `standup` (case-insensitive) decides;
    /// the first such component wins.
    pub fn from_path(path: &Path) -> Result<NoteSeries> {
        let normalized = path.to_string_lossy().replace('\\', "/");

        normalized
            .split('/')
            .find_map(|component| component.parse::<NoteSeries>().ok())
            .ok_or_else(|| DaylinkError::UnknownSeriesPath(path.to_path_buf()))
    }
}

impl FromStr for NoteSeries {
    type Err = DaylinkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "journal" => Ok(NoteSeries::Journal),
            "standup" => Ok(NoteSeries::Standup),
            _ => Err(DaylinkError::InvalidSeries(s.to_string())),
        }
    }
}

impl fmt::Display for NoteSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
