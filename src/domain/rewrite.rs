//! Rewriting stale link destinations in note text

use crate::domain::{RawLink, ResolvedLink};
use log::warn;
use std::cmp::Reverse;
use std::ops::Range;

/// Result of applying link fixes to a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    pub content: String,
    pub replacements: usize,
    /// Stale links whose destination could not be edited in place
    pub unapplied: Vec<RawLink>,
}

/// Point each stale link at its suggested destination.
///
/// Links parsed from the document are edited inside their source span, so titles,
/// emphasis and angle-bracket destinations survive. Links without a span fall back
/// to replacing the first verbatim `[text](old)`. Records that failed to resolve or
/// need no update are skipped.
pub fn apply_link_fixes<'a>(
    content: &str,
    fixes: impl IntoIterator<Item = &'a ResolvedLink>,
) -> RewriteResult {
    let mut edits: Vec<(Range<usize>, &str, &RawLink)> = Vec::new();
    let mut verbatim: Vec<(&RawLink, &str)> = Vec::new();
    let mut unapplied = Vec::new();

    for fix in fixes {
        let Some(suggested) = fix.suggested_destination() else {
            continue;
        };
        let link = &fix.classified.link;

        match &link.span {
            Some(span) => match locate_destination(content, span, &link.destination) {
                Some(range) => edits.push((range, suggested, link)),
                None => {
                    warn!(
                        "destination of [{}]({}) on line {} is not inline, left unchanged",
                        link.text, link.destination, link.line
                    );
                    unapplied.push(link.clone());
                }
            },
            None => verbatim.push((link, suggested)),
        }
    }

    let mut rewritten = content.to_string();
    let mut replacements = 0usize;

    // Back to front so earlier offsets stay valid
    edits.sort_by_key(|(range, _, _)| Reverse(range.start));
    let mut floor = usize::MAX;
    for (range, suggested, link) in edits {
        if range.end > floor {
            unapplied.push(link.clone());
            continue;
        }
        floor = range.start;
        rewritten.replace_range(range, suggested);
        replacements += 1;
    }

    for (link, suggested) in verbatim {
        let old = format!("[{}]({})", link.text, link.destination);
        let new = format!("[{}]({})", link.text, suggested);

        if rewritten.contains(&old) {
            rewritten = rewritten.replacen(&old, &new, 1);
            replacements += 1;
        } else {
            warn!("link {} not found verbatim on line {}, left unchanged", old, link.line);
            unapplied.push(link.clone());
        }
    }

    RewriteResult {
        content: rewritten,
        replacements,
        unapplied,
    }
}

/// Byte range of the written destination inside a link's source span.
///
/// Only an occurrence opened by `(` or `<` counts, so dates in the link text or
/// title are left alone. Reference links have no inline destination.
fn locate_destination(
    content: &str,
    span: &Range<usize>,
    destination: &str,
) -> Option<Range<usize>> {
    let source = content.get(span.clone())?;

    source
        .match_indices(destination)
        .find(|(at, _)| {
            source[..*at]
                .trim_end()
                .ends_with(|c: char| c == '(' || c == '<')
        })
        .map(|(at, _)| span.start + at..span.start + at + destination.len())
}
