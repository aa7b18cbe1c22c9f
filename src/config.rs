// src/config.rs
// =============================================================================
// Settings that shape a scan.
//
// There is no config file: the CLI builds a ScanConfig from its flags and
// hands it to the fetcher and the crawler. Library users can start from
// ScanConfig::default() and override single fields.
// =============================================================================

use std::time::Duration;

/// How long the link crawl may keep starting new fetches (seconds).
pub const DEFAULT_TIME_BUDGET_SECS: u64 = 10;

/// The id of the element that holds the article body on Wikipedia pages.
pub const DEFAULT_CONTENT_ID: &str = "mw-content-text";

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Wall-clock budget for the link crawl.
    ///
    /// Checked before each link; a request already in flight is never cut off.
    pub time_budget: Duration,

    /// User-Agent header sent with every request
    /// (Wikipedia rejects clients that don't identify themselves)
    pub user_agent: String,

    /// Id of the main content container whose links get crawled
    pub content_id: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_secs(DEFAULT_TIME_BUDGET_SECS),
            user_agent: default_user_agent(),
            content_id: DEFAULT_CONTENT_ID.to_string(),
        }
    }
}

impl ScanConfig {
    /// Returns a copy with the crawl budget replaced.
    pub fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = time_budget;
        self
    }

    /// Returns a copy with the User-Agent replaced.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

// Format: name/version (+repository)
fn default_user_agent() -> String {
    format!(
        "{}/{} (+https://github.com/vswaroop04/citation-scout)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.time_budget, Duration::from_secs(10));
        assert_eq!(config.content_id, "mw-content-text");
        assert!(config.user_agent.starts_with("citation-scout/"));
    }

    #[test]
    fn test_builders_override_fields() {
        let config = ScanConfig::default()
            .with_time_budget(Duration::from_millis(250))
            .with_user_agent("TestBot/1.0");
        assert_eq!(config.time_budget, Duration::from_millis(250));
        assert_eq!(config.user_agent, "TestBot/1.0");
    }
}
