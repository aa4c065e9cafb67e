//! Data model for scraped articles.
//!
//! [`ArticleRecord`] is the only entity the scraper produces. Field order
//! here is the key order of the emitted JSON objects.

use serde::{Deserialize, Serialize};

/// One entry from the news listing.
///
/// `title` and `url` are always non-empty; blocks missing either are
/// dropped before a record is built. The alert fields are only present
/// when keyword alerting is enabled for the run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// The headline text.
    pub title: String,
    /// The listing teaser; may be empty.
    pub summary: String,
    /// Absolute link to the full article.
    pub url: String,
    /// Human-readable publication date, e.g. `"January 5, 2024"`.
    pub date: String,
    /// Topic tags in vocabulary order.
    pub tags: Vec<String>,
    /// Thumbnail source; may be empty.
    pub image_url: String,
    /// Whether any alert keyword matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<bool>,
    /// Alert keywords found in the title or summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_keywords: Option<Vec<String>>,
}
