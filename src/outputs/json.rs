//! JSON array serialization for scraped records.
//!
//! Callers rely on always receiving a syntactically valid JSON array, so
//! serialization errors degrade to `[]` instead of propagating.

use crate::models::ArticleRecord;
use tracing::{error, instrument};

/// Literal emitted whenever there is nothing (or nothing valid) to report.
pub const EMPTY_ARRAY: &str = "[]";

/// Serialize records to a compact, single-line JSON array.
#[instrument(level = "debug", skip_all, fields(count = records.len()))]
pub fn to_json_array(records: &[ArticleRecord]) -> String {
    match serde_json::to_string(records) {
        Ok(json) => json,
        Err(e) => {
            error!(error = %e, "Failed to serialize articles");
            EMPTY_ARRAY.to_string()
        }
    }
}
