//! Structural queries over parsed listing markup.
//!
//! `scraper` already covers "select all matching S" on a document and
//! "first match of S under node N" on an element. This module holds the
//! compiled selectors for the listing layout and a few helpers that turn
//! matches into trimmed text or attribute values.

use crate::utils::squash_whitespace;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

/// Compiled selectors for the listing layout.
pub struct ListingSelectors {
    /// One per article block.
    pub post: Selector,
    /// Ad marker inside a block.
    pub sponsored: Selector,
    pub link: Selector,
    pub title: Selector,
    pub description: Selector,
    /// Date and byline label.
    pub label: Selector,
    pub image: Selector,
}

fn compile(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

pub static SELECTORS: Lazy<ListingSelectors> = Lazy::new(|| ListingSelectors {
    post: compile("div.body-post"),
    sponsored: compile("span.sponsored"),
    link: compile("a[href]"),
    title: compile("h2.home-title"),
    description: compile("div.home-desc"),
    label: compile("div.item-label"),
    image: compile("img"),
});

/// First descendant of `node` matching `selector`.
pub fn first<'a>(node: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    node.select(selector).next()
}

/// Whether any descendant of `node` matches `selector`.
pub fn contains(node: ElementRef<'_>, selector: &Selector) -> bool {
    first(node, selector).is_some()
}

/// All text under an element, whitespace-collapsed.
pub fn text_of(element: ElementRef<'_>) -> String {
    squash_whitespace(&element.text().collect::<String>())
}

/// Text of the first match, if there is one.
pub fn first_text(node: ElementRef<'_>, selector: &Selector) -> Option<String> {
    first(node, selector).map(text_of)
}

/// Attribute of the first match. `None` if no match or no such attribute.
pub fn first_attr<'a>(node: ElementRef<'a>, selector: &Selector, attr: &str) -> Option<&'a str> {
    first(node, selector).and_then(|el| el.value().attr(attr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const BLOCK: &str = r#"
        <div class="body-post">
          <a class="story-link" href="/2024/01/a.html">
            <h2 class="home-title">
              Patch   Now
            </h2>
            <img alt="thumb">
            <img src="/b.jpg">
          </a>
        </div>"#;

    fn with_block<F: FnOnce(ElementRef<'_>)>(f: F) {
        let doc = Html::parse_document(BLOCK);
        let block = doc.select(&SELECTORS.post).next().unwrap();
        f(block);
    }

    #[test]
    fn test_first_text_collapses_whitespace() {
        with_block(|block| {
            assert_eq!(first_text(block, &SELECTORS.title).as_deref(), Some("Patch Now"));
            assert_eq!(first_text(block, &SELECTORS.description), None);
        });
    }

    #[test]
    fn test_first_attr_only_looks_at_first_match() {
        with_block(|block| {
            assert_eq!(first_attr(block, &SELECTORS.link, "href"), Some("/2024/01/a.html"));
            // First <img> has no src, so nothing is returned
            assert_eq!(first_attr(block, &SELECTORS.image, "src"), None);
        });
    }

    #[test]
    fn test_contains() {
        with_block(|block| {
            assert!(contains(block, &SELECTORS.title));
            assert!(!contains(block, &SELECTORS.sponsored));
        });
    }
}
