//! Link extraction from markdown

use crate::domain::RawLink;
use pulldown_cmark::{Event, LinkType, Parser as MdParser, Tag, TagEnd};
use std::ops::Range;

/// A link whose closing event has not been seen yet
struct PendingLink {
    destination: String,
    text: String,
    line: usize,
    span: Range<usize>,
}

/// Extract inline and reference links in document order.
///
/// Autolinks (`<https://…>`) and images are not links for this purpose, and
/// anything inside code spans or code blocks is never parsed as a link.
pub fn extract_links(content: &str) -> Vec<RawLink> {
    let mut links = Vec::new();
    let mut pending: Option<PendingLink> = None;

    for (event, range) in MdParser::new(content).into_offset_iter() {
        match event {
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                ..
            }) => {
                if matches!(link_type, LinkType::Autolink | LinkType::Email) {
                    continue;
                }
                pending = Some(PendingLink {
                    destination: dest_url.to_string(),
                    text: String::new(),
                    line: line_at(content, range.start),
                    span: range,
                });
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(link) = pending.as_mut() {
                    link.text.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(link) = pending.as_mut() {
                    link.text.push(' ');
                }
            }
            Event::End(TagEnd::Link) => {
                if let Some(link) = pending.take() {
                    links.push(
                        RawLink::new(link.text, link.destination)
                            .with_line(link.line)
                            .with_span(link.span),
                    );
                }
            }
            _ => {}
        }
    }

    links
}

/// 1-based line number of a byte offset
fn line_at(content: &str, offset: usize) -> usize {
    content[..offset].matches('\n').count() + 1
}
