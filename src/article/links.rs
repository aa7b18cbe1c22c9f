// src/article/links.rs
// =============================================================================
// Extracts the links the crawler follows.
//
// Only the article body counts: navigation, sidebars and footers live outside
// the main content container and are ignored. Links come back raw (exactly
// as written in href) and in document order, duplicates included. Filtering
// and resolving happen in the crawler, one link at a time.
// =============================================================================

use scraper::{Html, Selector};

/// Internal article links start with this path.
pub const ARTICLE_PREFIX: &str = "/wiki/";

/// Media description pages; never worth scanning.
pub const FILE_PREFIX: &str = "/wiki/File:";

// Returns every href inside <div id="{content_id}">, or None if there is
// no such div
pub(super) fn content_links(document: &Html, content_id: &str) -> Option<Vec<String>> {
    let content_selector = Selector::parse(&format!("div#{}", content_id)).ok()?;
    let link_selector = Selector::parse("a[href]").unwrap();

    let content = document.select(&content_selector).next()?;

    Some(
        content
            .select(&link_selector)
            .filter_map(|link| link.value().attr("href"))
            .map(str::to_string)
            .collect(),
    )
}

/// Checks whether an href points at another article
///
/// Examples:
///   "/wiki/Rust"               -> true
///   "/wiki/File:Logo.png"      -> false (media page)
///   "/w/index.php?title=Rust"  -> false (not an article path)
///   "https://example.com/wiki/" -> false (external)
pub fn is_article_link(href: &str) -> bool {
    href.starts_with(ARTICLE_PREFIX) && !href.starts_with(FILE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::super::Article;
    use super::*;

    #[test]
    fn test_article_link_filter() {
        assert!(is_article_link("/wiki/Rust_(programming_language)"));
        assert!(is_article_link("/wiki/Help:Contents"));
        assert!(!is_article_link("/wiki/File:Ferris.png"));
        assert!(!is_article_link("/w/index.php?title=Rust"));
        assert!(!is_article_link("#cite_note-1"));
        assert!(!is_article_link("https://en.wikipedia.org/wiki/Rust"));
    }

    #[test]
    fn test_only_main_content_links() {
        let html = r##"
            <div id="mw-navigation"><a href="/wiki/Main_Page">Main</a></div>
            <div id="mw-content-text">
                <p><a href="/wiki/A">A</a> and <a href="#cite">note</a> <a>no href</a></p>
                <a href="/wiki/A">A again</a>
            </div>
        "##;
        let links = Article::parse(html).content_links("mw-content-text").unwrap();
        assert_eq!(links, vec!["/wiki/A", "#cite", "/wiki/A"]);
    }

    #[test]
    fn test_missing_content_region() {
        let html = r#"<div id="content"><a href="/wiki/A">A</a></div>"#;
        assert!(Article::parse(html).content_links("mw-content-text").is_none());
    }
}
