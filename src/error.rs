//! Error kinds raised while scraping.
//!
//! Two tiers exist and neither ever escapes [`crate::scrapers::thehackernews::scrape`]:
//!
//! - [`FetchFailure`]: the listing page could not be downloaded. The whole
//!   run yields an empty array.
//! - [`ExtractionFailure`]: a single article block had an unusable shape.
//!   Only that block is dropped.

use reqwest::StatusCode;

/// The listing page could not be fetched.
#[derive(Debug, thiserror::Error)]
pub enum FetchFailure {
    /// The HTTP client could not be constructed (TLS backend, bad header value).
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// DNS, connect, timeout, or body read failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    Status { status: StatusCode, url: String },
}

/// One article block could not be turned into a record.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionFailure {
    #[error("article link {href:?} could not be resolved: {source}")]
    InvalidLink {
        href: String,
        #[source]
        source: url::ParseError,
    },

    #[error("article link {href:?} uses unsupported scheme {scheme:?}")]
    UnsupportedScheme { href: String, scheme: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_failure_message() {
        let err = FetchFailure::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            url: "https://thehackernews.com/".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "https://thehackernews.com/ returned HTTP 503 Service Unavailable"
        );
    }

    #[test]
    fn test_unsupported_scheme_message() {
        let err = ExtractionFailure::UnsupportedScheme {
            href: "javascript:void(0)".to_string(),
            scheme: "javascript".to_string(),
        };
        assert!(err.to_string().contains("javascript"));
    }
}
