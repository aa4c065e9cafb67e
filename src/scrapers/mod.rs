//! News source scrapers.
//!
//! Each scraper follows the same three-stage pattern:
//!
//! 1. **Fetch**: download the listing page
//! 2. **Parse**: turn each article block into an [`ArticleRecord`](crate::models::ArticleRecord)
//! 3. **Serialize**: emit the records as a JSON array
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | The Hacker News | [`thehackernews`] | HTML scraping | Front page listing only |
//!
//! Fetch failures collapse the run to `[]`; per-block failures are logged
//! and skipped without affecting sibling articles.

pub mod thehackernews;
