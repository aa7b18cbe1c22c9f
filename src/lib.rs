// src/lib.rs
// =============================================================================
// citation-scout: find "citation needed" markers in Wikipedia articles.
//
// The pipeline runs one way:
//
//   URL -> fetch -> HTML -> article (markers, sections, links) -> report
//
// Modules:
// - fetch:   the Fetch trait and the reqwest-backed HttpFetcher
// - article: parsing and extraction, no network
// - scan:    single-article scans (fetch + extract)
// - crawl:   time-budgeted scan of an article's internal links
// - report:  ordered report maps and file writers
// - config:  scan settings
// - error:   the CitationError type
// =============================================================================

pub mod article;
pub mod config;
pub mod crawl;
pub mod error;
pub mod fetch;
pub mod report;
pub mod scan;

pub use article::Article;
pub use config::ScanConfig;
pub use crawl::{crawl_links, Clock, ManualClock, SystemClock};
pub use error::{CitationError, Result};
pub use fetch::{Fetch, HttpFetcher};
pub use report::{LinkEntry, LinkReport, OrderedReport, SectionReport};
pub use scan::{citations_needed_by_section, citations_needed_count, citations_needed_report};
