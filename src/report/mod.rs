// src/report/mod.rs
// =============================================================================
// Report types and the writers that save them.
//
// Submodules:
// - ordered: A map that remembers insertion order (JSON keys come out in
//   document order, the way they were found)
// - output: JSON and plain-text file writers
// =============================================================================

mod ordered;
mod output;

pub use ordered::OrderedReport;
pub use output::{
    render_text_report, save_json, save_text_report, to_json_pretty, TEXT_REPORT_TITLE,
};

use serde::{Deserialize, Serialize};

/// Heading text -> trimmed texts of the blocks under it that need citations.
pub type SectionReport = OrderedReport<Vec<String>>;

/// Linked article URL -> what the scan found there.
pub type LinkReport = OrderedReport<LinkEntry>;

/// Scan result for one linked article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Number of citation-needed markers
    pub count: usize,
    /// Numbered snippets, as produced by Article::extract_snippets
    pub report: Vec<String>,
}
