//! Locating daily note files on disk, tolerating gaps between days

use crate::domain::NoteSeries;
use crate::error::{DaylinkError, Result, SearchDirection};
use chrono::{Duration, NaiveDate};
use log::debug;
use std::path::{Path, PathBuf};

/// Date format used for note filenames
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Existence checks the finder needs from the outside world
pub trait NoteProbe {
    /// True if `dir` exists and is a directory
    fn dir_exists(&self, dir: &Path) -> bool;

    /// True if `path` exists and is a plain file
    fn file_exists(&self, path: &Path) -> bool;
}

impl<P: NoteProbe + ?Sized> NoteProbe for &P {
    fn dir_exists(&self, dir: &Path) -> bool {
        (**self).dir_exists(dir)
    }

    fn file_exists(&self, path: &Path) -> bool {
        (**self).file_exists(path)
    }
}

/// Day-by-day probing for the nearest existing note
#[derive(Debug, Clone)]
pub struct NoteFinder<P> {
    probe: P,
}

impl<P: NoteProbe> NoteFinder<P> {
    pub fn new(probe: P) -> Self {
        NoteFinder { probe }
    }

    /// Find the note for `date`, falling back to earlier days within the window.
    ///
    /// The exact date is always probed first, so an existing note for `date` is
    /// returned regardless of `window_days`.
    pub fn find_by_date(
        &self,
        date: NaiveDate,
        series: NoteSeries,
        dir: &Path,
        window_days: i64,
    ) -> Result<PathBuf> {
        self.check_inputs(dir, window_days)?;

        let exact = note_path(dir, date);
        if self.probe.file_exists(&exact) {
            return Ok(exact);
        }

        for offset in 1..=window_days {
            let Some(candidate) = date.checked_sub_signed(Duration::days(offset)) else {
                break;
            };
            let path = note_path(dir, candidate);
            if self.probe.file_exists(&path) {
                debug!(
                    "{} note for {} missing, fell back {} day(s) to {}",
                    series,
                    date.format(DATE_FORMAT),
                    offset,
                    path.display()
                );
                return Ok(path);
            }
        }

        Err(not_found(series, date, window_days, SearchDirection::Backward))
    }

    /// Find the first note strictly after `date` within the window.
    pub fn find_next(
        &self,
        date: NaiveDate,
        series: NoteSeries,
        dir: &Path,
        window_days: i64,
    ) -> Result<PathBuf> {
        self.check_inputs(dir, window_days)?;

        for offset in 1..=window_days {
            let Some(candidate) = date.checked_add_signed(Duration::days(offset)) else {
                break;
            };
            let path = note_path(dir, candidate);
            if self.probe.file_exists(&path) {
                debug!(
                    "next {} note after {} is {} day(s) ahead: {}",
                    series,
                    date.format(DATE_FORMAT),
                    offset,
                    path.display()
                );
                return Ok(path);
            }
        }

        Err(not_found(series, date, window_days, SearchDirection::Forward))
    }

    fn check_inputs(&self, dir: &Path, window_days: i64) -> Result<()> {
        if window_days <= 0 {
            return Err(DaylinkError::InvalidWindow(window_days));
        }

        if !self.probe.dir_exists(dir) {
            return Err(DaylinkError::DirectoryNotFound(dir.to_path_buf()));
        }

        Ok(())
    }
}

fn not_found(
    series: NoteSeries,
    date: NaiveDate,
    window_days: i64,
    direction: SearchDirection,
) -> DaylinkError {
    DaylinkError::NoteNotFound {
        series: series.to_string(),
        date: date.format(DATE_FORMAT).to_string(),
        window_days,
        direction,
    }
}

/// Path of the note for `date` inside `dir`
pub fn note_path(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(build_filename(date))
}

/// Generate the filename for a note of the given date (YYYY-MM-DD.md)
pub fn build_filename(date: NaiveDate) -> String {
    format!("{}.md", date.format(DATE_FORMAT))
}

/// Parse the date from the first 10 characters of a note's base name
pub fn parse_date_from_filename(path: &Path) -> Result<NaiveDate> {
    let base = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    let prefix = base
        .get(..10)
        .ok_or_else(|| DaylinkError::DateParse(format!("filename too short: {}", base)))?;

    if !is_date_shape(prefix) {
        return Err(DaylinkError::DateParse(base.to_string()));
    }

    NaiveDate::parse_from_str(prefix, DATE_FORMAT)
        .map_err(|e| DaylinkError::DateParse(format!("{}: {}", base, e)))
}

/// True for exactly `DDDD-DD-DD` with ASCII digits
pub(crate) fn is_date_shape(s: &str) -> bool {
    s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}
