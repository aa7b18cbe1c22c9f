// src/article/mod.rs
// =============================================================================
// This module turns article HTML into the things we report on.
//
// Submodules:
// - node: A typed view over the parsed tree (kinds, text, siblings, ancestors)
// - citations: Finds "citation needed" markers and builds numbered snippets
// - sections: Groups offending blocks under their section headings
// - links: Pulls internal article links out of the main content region
//
// An Article is parsed once and can then be asked for any of these. Nothing
// here touches the network; see the scan and crawl modules for that.
// =============================================================================

mod citations;
mod links;
mod node;
mod sections;

pub use citations::{format_snippet, MARKER_TEXT};
pub use links::{is_article_link, ARTICLE_PREFIX, FILE_PREFIX};
pub use node::{normalize_whitespace, Node, NodeKind};
pub use sections::SECTION_PHRASE;

use scraper::Html;

use crate::report::SectionReport;

// A parsed article page
//
// scraper::Html is not Send, so an Article should be built, queried and
// dropped between two .await points rather than kept around.
pub struct Article {
    document: Html,
}

impl Article {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Every citation-needed marker, in document order.
    pub fn markers(&self) -> Vec<Node<'_>> {
        citations::find_markers(&self.document)
    }

    /// Number of markers (exact text match, case-sensitive).
    pub fn count_citations(&self) -> usize {
        self.markers().len()
    }

    /// One `"[i] <text>\n\n"` entry per marker that sits inside a list item
    /// or paragraph.
    ///
    /// `i` counts markers, not snippets: a marker with no `<li>`/`<p>` around
    /// it is dropped but still uses up its number.
    pub fn extract_snippets(&self) -> Vec<String> {
        citations::build_snippets(&self.markers())
    }

    pub fn group_by_section(&self) -> SectionReport {
        sections::group_by_section(&self.document)
    }

    // Returns None when the content region doesn't exist
    pub fn content_links(&self, content_id: &str) -> Option<Vec<String>> {
        links::content_links(&self.document, content_id)
    }
}
