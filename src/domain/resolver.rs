//! Link resolution
//!
//! Turns a fixable [`ClassifiedLink`] into the note file it should point to and
//! decides whether the written destination has gone stale.

use crate::domain::finder::{parse_date_from_filename, NoteFinder, NoteProbe, DATE_FORMAT};
use crate::domain::{ClassifiedLink, LinkKind, NoteSeries};
use crate::error::{DaylinkError, Result, SearchDirection};
use chrono::{Duration, NaiveDate};
use log::debug;
use std::path::{Path, PathBuf};

/// Root directory of each series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesDirs {
    pub journal: PathBuf,
    pub standup: PathBuf,
}

impl SeriesDirs {
    pub fn new(journal: PathBuf, standup: PathBuf) -> Self {
        SeriesDirs { journal, standup }
    }

    pub fn get(&self, series: NoteSeries) -> &Path {
        match series {
            NoteSeries::Journal => &self.journal,
            NoteSeries::Standup => &self.standup,
        }
    }
}

/// Where a link actually lands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub path: PathBuf,
    pub date: NaiveDate,
    pub series: NoteSeries,
    pub needs_update: bool,
    /// Canonical destination, present only when `needs_update` is set
    pub suggested_destination: Option<String>,
}

/// Outcome of resolving one classified link
#[derive(Debug)]
pub struct ResolvedLink {
    pub classified: ClassifiedLink,
    pub outcome: Result<ResolvedTarget>,
}

impl ResolvedLink {
    pub fn needs_update(&self) -> bool {
        self.target().is_some_and(|t| t.needs_update)
    }

    pub fn suggested_destination(&self) -> Option<&str> {
        self.target()
            .and_then(|t| t.suggested_destination.as_deref())
    }

    pub fn resolved_path(&self) -> Option<&Path> {
        self.target().map(|t| t.path.as_path())
    }

    pub fn resolved_date(&self) -> Option<NaiveDate> {
        self.target().map(|t| t.date)
    }

    pub fn error(&self) -> Option<&DaylinkError> {
        self.outcome.as_ref().err()
    }

    fn target(&self) -> Option<&ResolvedTarget> {
        self.outcome.as_ref().ok()
    }
}

/// Resolves links found in one note
#[derive(Debug, Clone)]
pub struct LinkResolver<P> {
    finder: NoteFinder<P>,
    dirs: SeriesDirs,
    window_days: i64,
    current_date: NaiveDate,
    current_series: NoteSeries,
}

impl<P: NoteProbe> LinkResolver<P> {
    /// Create a resolver for the note dated `current_date` in `current_series`
    pub fn new(
        finder: NoteFinder<P>,
        dirs: SeriesDirs,
        window_days: i64,
        current_date: NaiveDate,
        current_series: NoteSeries,
    ) -> Self {
        LinkResolver {
            finder,
            dirs,
            window_days,
            current_date,
            current_series,
        }
    }

    pub fn resolve(&self, classified: ClassifiedLink) -> ResolvedLink {
        let outcome = self.resolve_target(&classified);

        match &outcome {
            Ok(target) => debug!(
                "[{}]({}) -> {} (update: {})",
                classified.link.text,
                classified.link.destination,
                target.path.display(),
                target.needs_update
            ),
            Err(e) => debug!(
                "[{}]({}) unresolved: {}",
                classified.link.text, classified.link.destination, e
            ),
        }

        ResolvedLink {
            classified,
            outcome,
        }
    }

    /// Resolve every link independently; one record per input, in order
    pub fn resolve_all(&self, classified: Vec<ClassifiedLink>) -> Vec<ResolvedLink> {
        classified
            .into_iter()
            .map(|link| self.resolve(link))
            .collect()
    }

    fn resolve_target(&self, classified: &ClassifiedLink) -> Result<ResolvedTarget> {
        if !classified.needs_fixing() {
            return Err(DaylinkError::NotFixable(format!(
                "{} link [{}]({})",
                classified.kind, classified.link.text, classified.link.destination
            )));
        }

        let (path, series) = self.locate(classified)?;
        let date = parse_date_from_filename(&path)?;

        let resolved = date.format(DATE_FORMAT).to_string();
        let needs_update = classified.link.date_from_destination() != Some(resolved.as_str());
        let suggested_destination = needs_update.then(|| self.canonical_destination(date, series));

        Ok(ResolvedTarget {
            path,
            date,
            series,
            needs_update,
            suggested_destination,
        })
    }

    fn locate(&self, classified: &ClassifiedLink) -> Result<(PathBuf, NoteSeries)> {
        match classified.kind {
            LinkKind::TemporalPrevious => {
                let series = classified.target_series.unwrap_or(self.current_series);
                let day_before = self
                    .current_date
                    .checked_sub_signed(Duration::days(1))
                    .ok_or_else(|| self.out_of_range(series, SearchDirection::Backward))
                    .map_err(|e| DaylinkError::resolution("previous", e))?;

                let path = self
                    .finder
                    .find_by_date(day_before, series, self.dirs.get(series), self.window_days)
                    .map_err(|e| DaylinkError::resolution("previous", e))?;
                Ok((path, series))
            }
            LinkKind::TemporalNext => {
                let series = classified.target_series.unwrap_or(self.current_series);
                let path = self
                    .finder
                    .find_next(
                        self.current_date,
                        series,
                        self.dirs.get(series),
                        self.window_days,
                    )
                    .map_err(|e| DaylinkError::resolution("next", e))?;
                Ok((path, series))
            }
            LinkKind::CrossReference => {
                let series = classified
                    .target_series
                    .unwrap_or_else(|| self.current_series.opposite());
                let path = self
                    .finder
                    .find_by_date(
                        self.current_date,
                        series,
                        self.dirs.get(series),
                        self.window_days,
                    )
                    .map_err(|e| DaylinkError::resolution("cross-reference", e))?;
                Ok((path, series))
            }
            LinkKind::External | LinkKind::Other => Err(DaylinkError::NotFixable(
                classified.link.destination.clone(),
            )),
        }
    }

    /// Bare date within the same series, `../<series>/<date>` across series
    fn canonical_destination(&self, date: NaiveDate, series: NoteSeries) -> String {
        let day = date.format(DATE_FORMAT);
        if series == self.current_series {
            day.to_string()
        } else {
            format!("../{}/{}", series, day)
        }
    }

    fn out_of_range(&self, series: NoteSeries, direction: SearchDirection) -> DaylinkError {
        DaylinkError::NoteNotFound {
            series: series.to_string(),
            date: self.current_date.format(DATE_FORMAT).to_string(),
            window_days: self.window_days,
            direction,
        }
    }
}

/// Keep only records whose destination should change, preserving order
pub fn filter_needs_update(resolved: &[ResolvedLink]) -> Vec<&ResolvedLink> {
    resolved.iter().filter(|r| r.needs_update()).collect()
}
