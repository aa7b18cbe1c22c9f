// src/article/sections.rs
// =============================================================================
// Groups offending text by the section heading it appears under.
//
// How it works:
// 1. Find every <h2>..<h6> in document order
// 2. For each heading, walk the elements that follow it at the same level,
//    stopping at the next heading of any level
// 3. Keep the trimmed text of every sibling that *contains* the phrase
//    "citation needed" anywhere (substring match, unlike the exact match used
//    for counting markers)
// 4. Record the heading only if something was kept
//
// Two headings with the same text share one entry: the later one wins.
// =============================================================================

use scraper::{Html, Selector};

use super::node::Node;
use crate::report::SectionReport;

/// The phrase a sibling block must contain to be reported.
pub const SECTION_PHRASE: &str = "citation needed";

pub(super) fn group_by_section(document: &Html) -> SectionReport {
    let selector = Selector::parse("h2, h3, h4, h5, h6").unwrap();
    let mut report = SectionReport::new();

    for heading in document.select(&selector).map(Node::new) {
        let contents: Vec<String> = heading
            .next_siblings()
            .take_while(|sibling| !sibling.kind().is_heading())
            .map(|sibling| sibling.text())
            .filter(|text| text.contains(SECTION_PHRASE))
            .map(|text| text.trim().to_string())
            .collect();

        if !contents.is_empty() {
            report.insert(heading.text().trim().to_string(), contents);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::super::Article;

    fn sections(html: &str) -> Vec<(String, Vec<String>)> {
        Article::parse(html)
            .group_by_section()
            .into_iter()
            .collect()
    }

    #[test]
    fn test_heading_without_qualifying_blocks_is_omitted() {
        let html = "<h2>A</h2><p> Needs work [citation needed] </p><p>fine</p>\
                    <h2>B</h2><p>all good</p>";
        assert_eq!(
            sections(html),
            vec![(
                "A".to_string(),
                vec!["Needs work [citation needed]".to_string()]
            )]
        );
    }

    #[test]
    fn test_substring_match() {
        let html = "<h3>History</h3><ul><li>It was big.[citation needed] Really.</li></ul>";
        let result = sections(html);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].0, "History");
        assert_eq!(result[0].1, vec!["It was big.[citation needed] Really."]);
    }

    #[test]
    fn test_stops_at_next_heading_of_any_level() {
        let html = "<h2>Top</h2><p>clean</p><h4>Deep</h4><p>x citation needed</p>";
        let result = sections(html);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].0, "Deep");
    }

    #[test]
    fn test_nested_heading_only_sees_its_own_siblings() {
        // The <h2> inside the wrapper has no siblings; the outer <p> is not one
        let html = "<div><h2>Wrapped</h2></div><p>citation needed</p>";
        assert!(sections(html).is_empty());
    }

    #[test]
    fn test_h1_is_not_a_section() {
        let html = "<h1>Title</h1><p>citation needed</p>";
        assert!(sections(html).is_empty());
    }

    #[test]
    fn test_duplicate_headings_last_write_wins() {
        let html = "<h2> Notes </h2><p>first citation needed</p>\
                    <h2>Other</h2><p>other citation needed</p>\
                    <h2>Notes</h2><p>second citation needed</p>";
        let result = sections(html);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], ("Notes".to_string(), vec!["second citation needed".to_string()]));
        assert_eq!(result[1].0, "Other");
    }
}
