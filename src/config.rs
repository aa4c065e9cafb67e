//! Immutable scrape configuration.
//!
//! Everything the extractor needs to know about its target lives in a
//! [`ScrapeConfig`] built once in `main` and passed down by reference.
//! The defaults are the fixed production values; tests build their own
//! configs pointing at a local mock server.

use std::time::Duration;

/// Listing page that is scraped.
pub const TARGET_URL: &str = "https://thehackernews.com/";

/// Browser identification sent with the request; the site rejects bare clients.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Tag applied when no vocabulary term matches.
pub const FALLBACK_TAG: &str = "Cybersecurity";

/// Candidate topic terms, matched in this order. Lowercase.
pub const TAG_VOCABULARY: &[&str] = &[
    "malware",
    "ransomware",
    "phishing",
    "data breach",
    "vulnerability",
    "exploit",
    "zero-day",
    "cve",
    "hackers",
    "apt",
    "attack",
    "security",
    "privacy",
    "threat",
    "patch",
    "update",
    "windows",
    "android",
    "apple",
    "ios",
    "linux",
    "cloud",
    "browser",
    "chrome",
    "firefox",
    "edge",
    "safari",
    "microsoft",
    "google",
    "amazon",
    "aws",
    "azure",
    "cybercrime",
    "ddos",
    "encryption",
    "blockchain",
    "cryptocurrency",
    "bitcoin",
];

/// Settings for a single scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Page to download; also the base for resolving relative links.
    pub url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub vocabulary: Vec<String>,
    pub fallback_tag: String,
    /// Alert keywords. Empty disables alerting.
    pub keywords: Vec<String>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: TARGET_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: REQUEST_TIMEOUT,
            vocabulary: TAG_VOCABULARY.iter().map(|t| t.to_string()).collect(),
            fallback_tag: FALLBACK_TAG.to_string(),
            keywords: Vec::new(),
        }
    }
}

impl ScrapeConfig {
    /// Return a copy of the config with alert keywords set.
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Config aimed at a different page, used to point tests at a mock server.
    #[cfg(test)]
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_fixed_constants() {
        let config = ScrapeConfig::default();
        assert_eq!(config.url, "https://thehackernews.com/");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(config.fallback_tag, "Cybersecurity");
        assert!(config.keywords.is_empty());
    }

    #[test]
    fn test_vocabulary_is_lowercase_and_unique() {
        assert_eq!(TAG_VOCABULARY.len(), 38);
        for term in TAG_VOCABULARY {
            assert_eq!(*term, term.to_lowercase());
        }
        let mut sorted = TAG_VOCABULARY.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), TAG_VOCABULARY.len());
    }

    #[test]
    fn test_with_keywords() {
        let config = ScrapeConfig::default().with_keywords(vec!["lazarus".to_string()]);
        assert_eq!(config.keywords, vec!["lazarus"]);
        assert_eq!(config.url, TARGET_URL);
    }
}
