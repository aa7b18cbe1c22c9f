// src/error.rs
// =============================================================================
// The error type shared by every part of the library.
//
// Errors fall into three groups:
// - Fetch errors: the network or the server let us down (Http, Status)
// - Parse errors: the page is not shaped like a Wikipedia article
//   (MissingContent) or the URL itself is bad (InvalidUrl)
// - Output errors: writing a report to disk failed (Io, Json)
//
// "Nothing found" is never an error. Zero markers, zero sections and zero
// qualifying links all come back as empty containers.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CitationError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("HTTP error for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Main content region '#{id}' not found in {url}")]
    MissingContent { url: String, id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CitationError {
    /// True for failures that happened while fetching a page.
    ///
    /// The link crawler skips a link on these instead of giving up.
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, CitationError::Http { .. } | CitationError::Status { .. })
    }
}

pub type Result<T> = std::result::Result<T, CitationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_fetch_error() {
        let err = CitationError::Status {
            url: "https://en.wikipedia.org/wiki/Nope".to_string(),
            status: 404,
        };
        assert!(err.is_fetch_error());
        assert_eq!(err.to_string(), "HTTP 404 for https://en.wikipedia.org/wiki/Nope");
    }

    #[test]
    fn test_missing_content_is_not_fetch_error() {
        let err = CitationError::MissingContent {
            url: "https://example.com".to_string(),
            id: "mw-content-text".to_string(),
        };
        assert!(!err.is_fetch_error());
        assert!(err.to_string().contains("#mw-content-text"));
    }
}
