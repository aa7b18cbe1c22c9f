// src/crawl/links.rs
// =============================================================================
// Scans the articles a page links to, within a time budget.
//
// How it works:
// 1. Note the start time, then fetch and parse the starting page
// 2. Collect every href inside the main content region, in document order
// 3. For each href:
//    a. Out of time? Stop and return what we have
//    b. Not an article link (or a File: page)? Skip it
//    c. Resolve it against the starting URL, fetch it, count markers
//    d. Markers found? Record { count, report } under the absolute URL
//
// The budget is checked before each link, so a slow request can overshoot it;
// it is never interrupted. Requests go out one at a time.
//
// Rust concepts:
// - Generics: crawl_links works with any Fetch and any Clock
// - Match guards: `Err(e) if e.is_fetch_error()` picks out the errors we skip
// =============================================================================

use tracing::{debug, info, warn};
use url::Url;

use super::clock::Clock;
use crate::article::{is_article_link, Article};
use crate::config::ScanConfig;
use crate::error::{CitationError, Result};
use crate::fetch::Fetch;
use crate::report::{LinkEntry, LinkReport};

// Crawls the article links of `start_url`
//
// Parameters:
//   fetcher: where pages come from (HttpFetcher, or a fake in tests)
//   clock: time source for the budget
//   start_url: the article whose links get scanned
//   config: supplies time_budget and the content region id
//
// Returns: linked URL -> { count, report }, only for pages with markers,
// in the order the links appear. A repeated link is scanned again and
// overwrites its own entry.
//
// Errors: an invalid start URL, a failed fetch of the start page, or a start
// page without a content region. Failures on linked pages are not errors.
pub async fn crawl_links<F: Fetch, C: Clock>(
    fetcher: &F,
    clock: &C,
    start_url: &str,
    config: &ScanConfig,
) -> Result<LinkReport> {
    let started = clock.now();

    let base = Url::parse(start_url).map_err(|source| CitationError::InvalidUrl {
        url: start_url.to_string(),
        source,
    })?;

    let html = fetcher.fetch(start_url).await?;
    let hrefs = Article::parse(&html)
        .content_links(&config.content_id)
        .ok_or_else(|| CitationError::MissingContent {
            url: start_url.to_string(),
            id: config.content_id.clone(),
        })?;

    info!("Found {} link(s) in {}", hrefs.len(), start_url);

    let mut report = LinkReport::new();

    for href in hrefs {
        let elapsed = clock.now().saturating_sub(started);
        if elapsed > config.time_budget {
            info!(
                "Time budget of {:?} used up after {:?}; stopping with {} report(s)",
                config.time_budget,
                elapsed,
                report.len()
            );
            break;
        }

        if !is_article_link(&href) {
            continue;
        }

        let url = match base.join(&href) {
            Ok(url) => url.to_string(),
            Err(e) => {
                warn!("Skipping unresolvable link {}: {}", href, e);
                continue;
            }
        };

        match scan_linked_article(fetcher, &url).await {
            Ok(Some(entry)) => {
                info!("{} citation(s) needed in {}", entry.count, url);
                report.insert(url, entry);
            }
            Ok(None) => debug!("No citations needed in {}", url),
            Err(e) if e.is_fetch_error() => warn!("Skipping {}: {}", url, e),
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

// Fetches one linked page and builds its entry from a single parse
//
// Returns Ok(None) when the page has no markers
async fn scan_linked_article<F: Fetch>(fetcher: &F, url: &str) -> Result<Option<LinkEntry>> {
    let html = fetcher.fetch(url).await?;
    let article = Article::parse(&html);

    let count = article.count_citations();
    if count == 0 {
        return Ok(None);
    }

    Ok(Some(LinkEntry {
        count,
        report: article.extract_snippets(),
    }))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why pass a Clock instead of calling Instant::now()?
//    - Tests can use ManualClock and decide exactly when time "passes"
//    - The cut-off point then never depends on how fast the machine is
//
// 2. Why is the start page parsed in one statement?
//    - scraper::Html isn't Send and is large
//    - Pulling the hrefs out as plain Strings lets the parsed tree be
//      dropped before the first .await in the loop
//
// 3. What does saturating_sub do?
//    - Subtracts, but stops at zero instead of panicking on underflow
//
// 4. Why `Err(e) if e.is_fetch_error()`?
//    - A match guard: the arm only matches when the condition holds
//    - Any other error falls through to the next arm and is returned
// -----------------------------------------------------------------------------
