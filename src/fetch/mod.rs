// src/fetch/mod.rs
// =============================================================================
// This module gets article HTML off the network.
//
// Everything above this module talks to the Fetch trait rather than to
// reqwest directly. That keeps the scanners and the crawler testable:
// tests plug in a fake fetcher that serves canned pages (and can even move a
// synthetic clock forward on every request).
//
// Rust concepts:
// - Traits: A shared interface that several types can implement
// - async fn in traits: Lets a trait method be awaited like any async fn
// =============================================================================

mod http;

pub use http::HttpFetcher;

use crate::error::Result;

/// Something that can turn a URL into a document body.
///
/// Implementations issue one request per call. No retries, no caching:
/// a failure goes straight back to the caller.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&self, url: &str) -> Result<String>;
}
