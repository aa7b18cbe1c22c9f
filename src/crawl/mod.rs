// src/crawl/mod.rs
// =============================================================================
// This module handles the link crawl.
//
// Features:
// - Scans every internal article linked from the main content of a page
// - One level deep only: linked pages are scanned, their links are not followed
// - Bounded by a wall-clock time budget instead of a page count
// - A broken link is logged and skipped; it never loses earlier results
//
// Submodules:
// - clock: Real and synthetic time sources for the budget
// - links: The crawl loop itself
// =============================================================================

mod clock;
mod links;

pub use clock::{Clock, ManualClock, SystemClock};
pub use links::crawl_links;
