//! Keyword alerts.
//!
//! Operators can pass watch keywords on the command line. Every record
//! whose title or summary contains one of them is flagged with
//! `alert: true` and the list of keywords that hit.

use crate::models::ArticleRecord;
use itertools::Itertools;
use tracing::{debug, info, instrument};

/// Case-insensitive substring matcher over a fixed keyword list.
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    keywords: Vec<String>,
}

impl KeywordMatcher {
    /// Normalize keywords: trimmed, lowercased, blanks dropped, first
    /// occurrence of each kept.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .unique()
            .collect();
        Self { keywords }
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Keywords present in the lowercased title and summary, in configured order.
    pub fn matches(&self, title: &str, summary: &str) -> Vec<String> {
        let haystack = format!("{title} {summary}").to_lowercase();
        self.keywords
            .iter()
            .filter(|k| haystack.contains(k.as_str()))
            .cloned()
            .collect()
    }

    /// Set the alert fields on every record. No-op without keywords.
    #[instrument(level = "info", skip_all, fields(keywords = self.keywords.len()))]
    pub fn apply(&self, records: &mut [ArticleRecord]) {
        if self.is_empty() {
            return;
        }
        let mut alerted = 0usize;
        for record in records.iter_mut() {
            let matched = self.matches(&record.title, &record.summary);
            if !matched.is_empty() {
                alerted += 1;
                debug!(title = %record.title, ?matched, "Alert keywords matched");
            }
            record.alert = Some(!matched.is_empty());
            record.matched_keywords = Some(matched);
        }
        info!(total = records.len(), alerted, "Applied keyword alerts");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, summary: &str) -> ArticleRecord {
        ArticleRecord {
            title: title.to_string(),
            summary: summary.to_string(),
            url: "https://thehackernews.com/a.html".to_string(),
            date: "January 5, 2024".to_string(),
            tags: vec!["Cybersecurity".to_string()],
            image_url: String::new(),
            alert: None,
            matched_keywords: None,
        }
    }

    #[test]
    fn test_new_normalizes_and_dedupes() {
        let matcher = KeywordMatcher::new(["  Lazarus ", "lazarus", "", "LockBit"]);
        assert_eq!(matcher.keywords, vec!["lazarus", "lockbit"]);
    }

    #[test]
    fn test_matches_in_configured_order() {
        let matcher = KeywordMatcher::new(["lockbit", "lazarus"]);
        let hits = matcher.matches("Lazarus Group Deploys", "New LockBit variant");
        assert_eq!(hits, vec!["lockbit", "lazarus"]);
    }

    #[test]
    fn test_apply_sets_alert_fields() {
        let matcher = KeywordMatcher::new(["lazarus"]);
        let mut records = vec![record("Lazarus strikes again", ""), record("Unrelated", "news")];
        matcher.apply(&mut records);

        assert_eq!(records[0].alert, Some(true));
        assert_eq!(records[0].matched_keywords, Some(vec!["lazarus".to_string()]));
        assert_eq!(records[1].alert, Some(false));
        assert_eq!(records[1].matched_keywords, Some(vec![]));
    }

    #[test]
    fn test_apply_without_keywords_leaves_records_untouched() {
        let matcher = KeywordMatcher::new(Vec::<String>::new());
        let mut records = vec![record("Lazarus strikes again", "")];
        matcher.apply(&mut records);
        assert_eq!(records[0].alert, None);
        assert_eq!(records[0].matched_keywords, None);
    }
}
