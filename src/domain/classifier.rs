//! Link classification
//!
//! Rules run in a fixed order and the first match wins:
//! URL, date-link shape, "previous" synonym, "next" synonym,
//! cross-reference marker, otherwise `Other`.

use crate::domain::{NoteSeries, RawLink};
use std::fmt;

/// Link text fragments that mark a same-day link into the other series
const CROSS_REFERENCE_MARKERS: [&str; 4] = ["standup", "journal", "daily", "daily log"];

/// What role a link plays in a daily note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// "Yesterday", "Previous", …
    TemporalPrevious,
    /// "Tomorrow", "Next", …
    TemporalNext,
    /// Same day, other series ("Standup", "Journal")
    CrossReference,
    /// Has a URI scheme
    External,
    /// Anything else
    Other,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::TemporalPrevious => "temporal_previous",
            LinkKind::TemporalNext => "temporal_next",
            LinkKind::CrossReference => "cross_reference",
            LinkKind::External => "external",
            LinkKind::Other => "other",
        }
    }

    /// Kinds the resolver knows how to repair
    pub fn is_fixable(&self) -> bool {
        match self {
            LinkKind::TemporalPrevious | LinkKind::TemporalNext | LinkKind::CrossReference => true,
            LinkKind::External | LinkKind::Other => false,
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Link text synonyms for one series
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesSynonyms {
    pub previous: Vec<String>,
    pub next: Vec<String>,
}

/// A link together with its classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLink {
    pub link: RawLink,
    pub kind: LinkKind,
    /// Series named by the destination path, if it names one
    pub target_series: Option<NoteSeries>,
}

impl ClassifiedLink {
    /// Candidate for resolution: a fixable kind with a date-shaped destination
    pub fn needs_fixing(&self) -> bool {
        self.kind.is_fixable() && self.link.is_date_link()
    }
}

/// Classifies raw links using per-series synonym lists
#[derive(Debug, Clone)]
pub struct LinkClassifier {
    previous: Vec<String>,
    next: Vec<String>,
}

impl LinkClassifier {
    /// Build a classifier from the journal and standup synonym lists.
    /// Synonyms from both series apply to every link.
    pub fn new(journal: &SeriesSynonyms, standup: &SeriesSynonyms) -> Self {
        let normalize = |list: &[String]| -> Vec<String> {
            list.iter().map(|s| normalize_text(s)).collect()
        };

        LinkClassifier {
            previous: [
                normalize(journal.previous.as_slice()),
                normalize(standup.previous.as_slice()),
            ]
            .concat(),
            next: [
                normalize(journal.next.as_slice()),
                normalize(standup.next.as_slice()),
            ]
            .concat(),
        }
    }

    pub fn classify(&self, link: RawLink) -> ClassifiedLink {
        let (kind, target_series) = self.kind_of(&link);
        ClassifiedLink {
            link,
            kind,
            target_series,
        }
    }

    /// Classify every link, preserving input order
    pub fn classify_all(&self, links: impl IntoIterator<Item = RawLink>) -> Vec<ClassifiedLink> {
        links.into_iter().map(|link| self.classify(link)).collect()
    }

    fn kind_of(&self, link: &RawLink) -> (LinkKind, Option<NoteSeries>) {
        if link.is_external() {
            return (LinkKind::External, None);
        }

        if !link.is_date_link() {
            return (LinkKind::Other, None);
        }

        let text = normalize_text(&link.text);

        let kind = if self.previous.contains(&text) {
            LinkKind::TemporalPrevious
        } else if self.next.contains(&text) {
            LinkKind::TemporalNext
        } else if CROSS_REFERENCE_MARKERS
            .iter()
            .any(|marker| text.contains(marker))
        {
            LinkKind::CrossReference
        } else {
            return (LinkKind::Other, None);
        };

        (kind, link.series_from_destination())
    }
}

fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Select links of one kind, preserving order
pub fn filter_by_kind(links: &[ClassifiedLink], kind: LinkKind) -> Vec<ClassifiedLink> {
    links
        .iter()
        .filter(|link| link.kind == kind)
        .cloned()
        .collect()
}
