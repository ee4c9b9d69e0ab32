//! Fix-links use case

use crate::domain::{
    apply_link_fixes, extract_links, filter_needs_update, parse_date_from_filename,
    LinkResolver, NoteFinder, NoteSeries, RawLink, ResolvedLink,
};
use crate::error::{DaylinkError, Result};
use crate::infrastructure::{Config, FileSystemRepository};
use log::info;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FixLinksOptions {
    pub file: PathBuf,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct FixLinksReport {
    pub file: PathBuf,
    pub series: NoteSeries,
    pub total_links: usize,
    pub fixable_links: usize,
    /// One record per fixable link, in document order
    pub resolved: Vec<ResolvedLink>,
    /// Edits applied, or that would be applied on a dry run
    pub replacements: usize,
    /// Stale links that cannot be edited in place
    pub unapplied: Vec<RawLink>,
    pub dry_run: bool,
    pub written: bool,
}

impl FixLinksReport {
    /// Records whose destination differs from the resolved note
    pub fn updates(&self) -> Vec<&ResolvedLink> {
        filter_needs_update(&self.resolved)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ResolvedLink> {
        self.resolved.iter().filter(|r| r.error().is_some())
    }

    pub fn is_unapplied(&self, record: &ResolvedLink) -> bool {
        self.unapplied.contains(&record.classified.link)
    }
}

pub fn fix_links(
    repository: &FileSystemRepository,
    config: &Config,
    options: FixLinksOptions,
) -> Result<FixLinksReport> {
    if !options.file.is_file() {
        return Err(DaylinkError::FileNotFound(options.file));
    }

    let series = NoteSeries::from_path(&options.file)?;
    let current_date = parse_date_from_filename(&options.file)?;
    let content = repository.read_note(&options.file)?;

    let links = extract_links(&content);
    let total_links = links.len();

    let fixable: Vec<_> = config
        .classifier()
        .classify_all(links)
        .into_iter()
        .filter(|link| link.needs_fixing())
        .collect();
    let fixable_links = fixable.len();

    info!(
        "{}: {} {} note, {} links, {} fixable",
        options.file.display(),
        current_date,
        series,
        total_links,
        fixable_links
    );

    let resolver = LinkResolver::new(
        NoteFinder::new(repository),
        config.series_dirs()?,
        config.search_window_days,
        current_date,
        series,
    );
    let resolved = resolver.resolve_all(fixable);

    let result = apply_link_fixes(&content, filter_needs_update(&resolved));
    let mut written = false;

    if !options.dry_run && result.replacements > 0 {
        repository.write_note_atomic(&options.file, &result.content)?;
        written = true;
        info!(
            "wrote {} replacement(s) to {}",
            result.replacements,
            options.file.display()
        );
    }

    Ok(FixLinksReport {
        file: options.file,
        series,
        total_links,
        fixable_links,
        resolved,
        replacements: result.replacements,
        unapplied: result.unapplied,
        dry_run: options.dry_run,
        written,
    })
}
