// src/scan.rs
// =============================================================================
// Single-article scans: fetch one URL, parse it, report on it.
//
// Each function does exactly one request. A fetch failure is returned to the
// caller as-is; there is nothing partial to salvage for a single page.
// =============================================================================

use tracing::debug;

use crate::article::Article;
use crate::error::Result;
use crate::fetch::Fetch;
use crate::report::SectionReport;

/// Counts the "citation needed" markers in the article at `url`.
pub async fn citations_needed_count<F: Fetch>(fetcher: &F, url: &str) -> Result<usize> {
    let html = fetcher.fetch(url).await?;
    let count = Article::parse(&html).count_citations();
    debug!("{} citation(s) needed in {}", count, url);
    Ok(count)
}

/// Numbered snippets for every marker in the article at `url`.
///
/// See [`Article::extract_snippets`] for the numbering rules.
pub async fn citations_needed_report<F: Fetch>(fetcher: &F, url: &str) -> Result<Vec<String>> {
    let html = fetcher.fetch(url).await?;
    Ok(Article::parse(&html).extract_snippets())
}

pub async fn citations_needed_by_section<F: Fetch>(fetcher: &F, url: &str) -> Result<SectionReport> {
    let html = fetcher.fetch(url).await?;
    Ok(Article::parse(&html).group_by_section())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CitationError;

    // Serves the same page for every URL, or fails every request
    struct StaticPage(Option<&'static str>);

    impl Fetch for StaticPage {
        async fn fetch(&self, url: &str) -> Result<String> {
            match self.0 {
                Some(html) => Ok(html.to_string()),
                None => Err(CitationError::Status {
                    url: url.to_string(),
                    status: 503,
                }),
            }
        }
    }

    const PAGE: &str = "<h2>Plot</h2><p>It rained.<span>citation needed</span></p>";

    #[tokio::test]
    async fn test_single_article_scans() {
        let fetcher = StaticPage(Some(PAGE));
        let url = "https://en.wikipedia.org/wiki/X";

        assert_eq!(citations_needed_count(&fetcher, url).await.unwrap(), 1);
        assert_eq!(
            citations_needed_report(&fetcher, url).await.unwrap(),
            vec!["[1] It rained.citation needed\n\n"]
        );
        let sections = citations_needed_by_section(&fetcher, url).await.unwrap();
        assert_eq!(sections.get("Plot"), Some(&vec!["It rained.citation needed".to_string()]));
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let fetcher = StaticPage(None);
        let err = citations_needed_count(&fetcher, "https://en.wikipedia.org/wiki/X")
            .await
            .unwrap_err();
        assert!(err.is_fetch_error());
    }
}
