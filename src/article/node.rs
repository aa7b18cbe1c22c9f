// src/article/node.rs
// =============================================================================
// A small, typed view over scraper's element tree.
//
// scraper hands us ElementRef values that can do a lot. The scanners only
// need a handful of things, so Node wraps an ElementRef and offers exactly
// those:
// - kind():                  what sort of block this is (heading, <li>, <p>, ...)
// - text():                  all descendant text, concatenated
// - children():              child elements
// - next_siblings():         following elements at the same tree level
// - find_ancestor_of_kind(): nearest enclosing element of a given kind
//
// Only elements are visited. Text and comment nodes between elements are
// skipped by every walker here.
//
// Rust concepts:
// - Lifetimes: Node<'a> borrows from the parsed document and can't outlive it
// - Copy types: Node is just a pointer into the tree, so copying it is free
// =============================================================================

use scraper::ElementRef;

// The element kinds the scanners care about
//
// Heading carries its level (2..=6). <h1> is the page title on Wikipedia
// and is deliberately not a section heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Heading(u8),
    ListItem,
    Paragraph,
    Span,
    Other,
}

impl NodeKind {
    // Maps a lowercase tag name to a kind
    pub fn from_tag(name: &str) -> Self {
        match name {
            "h2" => NodeKind::Heading(2),
            "h3" => NodeKind::Heading(3),
            "h4" => NodeKind::Heading(4),
            "h5" => NodeKind::Heading(5),
            "h6" => NodeKind::Heading(6),
            "li" => NodeKind::ListItem,
            "p" => NodeKind::Paragraph,
            "span" => NodeKind::Span,
            _ => NodeKind::Other,
        }
    }

    pub fn is_heading(self) -> bool {
        matches!(self, NodeKind::Heading(_))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    pub fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::from_tag(self.element.value().name())
    }

    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        self.element.children().filter_map(ElementRef::wrap).map(Node::new)
    }

    pub fn next_siblings(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        self.element
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .map(Node::new)
    }

    // Walks up from the parent (never matches the node itself)
    pub fn find_ancestor_of_kind(&self, kind: NodeKind) -> Option<Node<'a>> {
        self.element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .map(Node::new)
            .find(|node| node.kind() == kind)
    }
}

// Collapses every run of whitespace to a single space and trims both ends
//
// Example: "  Some \n\n  text\t here " -> "Some text here"
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is ElementRef::wrap?
//    - The tree holds text, comments and elements side by side
//    - wrap() returns Some only for elements, so filter_map(ElementRef::wrap)
//      keeps just the elements
//
// 2. Why `impl Iterator<Item = Node<'a>> + 'a`?
//    - The iterator borrows the document, not the Node it came from
//    - Callers can keep iterating after the Node itself is gone
// -----------------------------------------------------------------------------
