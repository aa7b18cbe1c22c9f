// src/article/citations.rs
// =============================================================================
// Finds "citation needed" markers and turns them into report snippets.
//
// On Wikipedia a marker looks like this:
//
//   <sup class="noprint Inline-Template Template-Fact">
//     <i>[<a href="/wiki/Wikipedia:Citation_needed">
//       <span title="...">citation needed</span></a>]</i>
//   </sup>
//
// So a marker is a <span> whose full text is exactly "citation needed".
// The match is exact: "Citation needed" or "citation needed here" don't count.
// =============================================================================

use scraper::{Html, Selector};

use super::node::{normalize_whitespace, Node, NodeKind};

/// The text that identifies a marker span.
pub const MARKER_TEXT: &str = "citation needed";

pub(super) fn find_markers(document: &Html) -> Vec<Node<'_>> {
    // "span" is a constant, known-valid selector
    let selector = Selector::parse("span").unwrap();

    document
        .select(&selector)
        .map(Node::new)
        .filter(|node| node.text() == MARKER_TEXT)
        .collect()
}

pub(super) fn build_snippets(markers: &[Node<'_>]) -> Vec<String> {
    markers
        .iter()
        .enumerate()
        .filter_map(|(index, marker)| {
            // Prefer the list item, fall back to the paragraph
            let block = marker
                .find_ancestor_of_kind(NodeKind::ListItem)
                .or_else(|| marker.find_ancestor_of_kind(NodeKind::Paragraph))?;

            Some(format_snippet(index + 1, &block.text()))
        })
        .collect()
}

/// Formats one report entry: `"[number] <normalized text>\n\n"`.
pub fn format_snippet(number: usize, text: &str) -> String {
    format!("[{}] {}\n\n", number, normalize_whitespace(text))
}
