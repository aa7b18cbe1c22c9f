// src/fetch/http.rs
// =============================================================================
// The real fetcher: plain HTTP GET requests with reqwest.
//
// Behavior:
// - One GET per call, following redirects (reqwest's default policy)
// - 2xx responses return the body as text
// - Anything else, or a transport failure, becomes a CitationError
// - No timeout here: the link crawler's time budget bounds the overall run
// =============================================================================

use reqwest::Client;
use tracing::debug;

use super::Fetch;
use crate::config::ScanConfig;
use crate::error::{CitationError, Result};

// A reusable HTTP client
//
// Client keeps a connection pool internally, so one HttpFetcher should be
// shared for a whole run instead of building a new one per request.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the client from the scan settings (currently just the User-Agent)
    pub fn new(config: &ScanConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|source| CitationError::Http {
                url: String::new(),
                source,
            })?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| CitationError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CitationError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // reqwest decodes using the charset from Content-Type (UTF-8 for Wikipedia)
        response.text().await.map_err(|source| CitationError::Http {
            url: url.to_string(),
            source,
        })
    }
}
