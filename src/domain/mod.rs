//! Domain layer - Link classification, resolution and note lookup

pub mod classifier;
pub mod finder;
pub mod link;
pub mod markdown;
pub mod resolver;
pub mod rewrite;
pub mod series;

#[cfg(test)]
pub(crate) mod testing;

pub use classifier::{filter_by_kind, ClassifiedLink, LinkClassifier, LinkKind, SeriesSynonyms};
pub use finder::{build_filename, parse_date_from_filename, NoteFinder, NoteProbe, DATE_FORMAT};
pub use link::RawLink;
pub use markdown::extract_links;
pub use resolver::{filter_needs_update, LinkResolver, ResolvedLink, ResolvedTarget, SeriesDirs};
pub use rewrite::{apply_link_fixes, RewriteResult};
pub use series::NoteSeries;
