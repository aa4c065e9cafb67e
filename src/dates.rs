//! Publication date extraction from listing labels.
//!
//! Labels read like `"Jan 5, 2024 — Breaking"`. The first
//! `<word> <day>, <year>` run is kept verbatim; anything else falls back
//! to the scrape date.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Display format for fallback dates, e.g. `"October 06, 2026"`.
pub const DATE_FORMAT: &str = "%B %d, %Y";

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+ \d{1,2}, \d{4}").expect("date pattern is valid"));

/// Pull a date out of a label's text, or fall back to `today`.
///
/// A missing label and a label without a recognizable date are treated
/// the same way.
pub fn extract_date(label_text: Option<&str>, today: NaiveDate) -> String {
    match label_text.and_then(|text| DATE_RE.find(text)) {
        Some(m) => m.as_str().to_string(),
        None => {
            debug!(label = ?label_text, "No date in label; using scrape date");
            format_today(today)
        }
    }
}

pub fn format_today(today: NaiveDate) -> String {
    today.format(DATE_FORMAT).to_string()
}
