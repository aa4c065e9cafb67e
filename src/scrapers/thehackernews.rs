//! The Hacker News listing scraper.
//!
//! This module scrapes the front page of [The Hacker News](https://thehackernews.com/),
//! a cybersecurity news site. The listing is a flat sequence of
//! `div.body-post` blocks, each carrying a link, headline, teaser, date
//! label and thumbnail, so a single page fetch yields every record.
//!
//! # Error containment
//!
//! - A failed fetch (transport error or non-2xx status) is logged and the
//!   run produces `[]`.
//! - A block that cannot be turned into a record is logged and dropped;
//!   its siblings are still processed.
//! - Blocks without a link or headline are dropped quietly.

use crate::alerts::KeywordMatcher;
use crate::config::ScrapeConfig;
use crate::dates::extract_date;
use crate::dom::{self, SELECTORS};
use crate::error::{ExtractionFailure, FetchFailure};
use crate::models::ArticleRecord;
use crate::outputs::json::{EMPTY_ARRAY, to_json_array};
use crate::tags::classify;
use crate::utils::truncate_for_log;
use chrono::{Local, NaiveDate};
use reqwest::Client;
use scraper::{ElementRef, Html};
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Build the HTTP client carrying the configured user agent and timeout.
pub fn build_client(config: &ScrapeConfig) -> Result<Client, FetchFailure> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .build()
        .map_err(FetchFailure::Client)
}

/// Download the listing page body.
///
/// # Errors
///
/// [`FetchFailure::Transport`] for DNS, connect, timeout and body read
/// failures; [`FetchFailure::Status`] when the server answers non-2xx.
#[instrument(level = "info", skip_all, fields(url = %config.url))]
pub async fn fetch_listing(client: &Client, config: &ScrapeConfig) -> Result<String, FetchFailure> {
    let response = client.get(&config.url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchFailure::Status {
            status,
            url: config.url.clone(),
        });
    }

    let body = response.text().await?;
    info!(%status, bytes = body.len(), "Fetched listing page");
    Ok(body)
}

/// Extract every article record from listing markup, in document order.
///
/// Pure apart from logging: `today` supplies the fallback date.
#[instrument(level = "info", skip_all, fields(bytes = html.len()))]
pub fn parse_listing(html: &str, config: &ScrapeConfig, today: NaiveDate) -> Vec<ArticleRecord> {
    let document = Html::parse_document(html);
    let base = match Url::parse(&config.url) {
        Ok(base) => Some(base),
        Err(e) => {
            warn!(url = %config.url, error = %e, "Page URL is not absolute; links are kept as-is");
            None
        }
    };

    let mut records = Vec::new();
    let mut blocks = 0usize;
    let mut sponsored = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for (index, block) in document.select(&SELECTORS.post).enumerate() {
        blocks += 1;

        if dom::contains(block, &SELECTORS.sponsored) {
            sponsored += 1;
            debug!(index, "Skipping sponsored block");
            continue;
        }

        match extract_article(block, base.as_ref(), config, today) {
            Ok(Some(record)) => {
                debug!(index, title = %record.title, "Extracted article");
                records.push(record);
            }
            Ok(None) => skipped += 1,
            Err(e) => {
                failed += 1;
                warn!(
                    index,
                    error = %e,
                    block = %truncate_for_log(&dom::text_of(block), 160),
                    "Error processing an article; skipping block"
                );
            }
        }
    }

    info!(
        blocks,
        sponsored,
        skipped,
        failed,
        articles = records.len(),
        "Parsed listing"
    );
    records
}

/// Turn one article block into a record.
///
/// Returns `Ok(None)` when the block lacks a link or a headline; such
/// blocks are layout furniture rather than broken articles.
///
/// # Errors
///
/// [`ExtractionFailure`] when the block's link cannot be resolved to an
/// `http(s)` URL.
pub fn extract_article(
    block: ElementRef<'_>,
    base: Option<&Url>,
    config: &ScrapeConfig,
    today: NaiveDate,
) -> Result<Option<ArticleRecord>, ExtractionFailure> {
    let Some(href) = dom::first_attr(block, &SELECTORS.link, "href")
        .map(str::trim)
        .filter(|href| !href.is_empty())
    else {
        debug!("Block has no article link");
        return Ok(None);
    };
    let url = resolve_link(base, href)?;

    let Some(title) = dom::first_text(block, &SELECTORS.title).filter(|t| !t.is_empty()) else {
        debug!(%url, "Block has no headline");
        return Ok(None);
    };

    let summary = dom::first_text(block, &SELECTORS.description).unwrap_or_default();
    let label = dom::first_text(block, &SELECTORS.label);
    let date = extract_date(label.as_deref(), today);

    let image_url = dom::first_attr(block, &SELECTORS.image, "src")
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(|src| resolve_image(base, src))
        .unwrap_or_default();

    let tags = classify(&title, &summary, &config.vocabulary, &config.fallback_tag);

    Ok(Some(ArticleRecord {
        title,
        summary,
        url,
        date,
        tags,
        image_url,
        alert: None,
        matched_keywords: None,
    }))
}

fn resolve(base: Option<&Url>, reference: &str) -> Result<Url, url::ParseError> {
    match base {
        Some(base) => base.join(reference),
        None => Url::parse(reference),
    }
}

fn resolve_link(base: Option<&Url>, href: &str) -> Result<String, ExtractionFailure> {
    let url = resolve(base, href).map_err(|source| ExtractionFailure::InvalidLink {
        href: href.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url.into()),
        scheme => Err(ExtractionFailure::UnsupportedScheme {
            href: href.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}

/// Images are optional, so an unresolvable source is kept verbatim.
fn resolve_image(base: Option<&Url>, src: &str) -> String {
    resolve(base, src)
        .map(String::from)
        .unwrap_or_else(|_| src.to_string())
}

async fn fetch(config: &ScrapeConfig) -> Result<String, FetchFailure> {
    let client = build_client(config)?;
    fetch_listing(&client, config).await
}

/// Scrape the listing and return the records as a JSON array.
///
/// Never fails: any fetch error yields `[]`, and broken blocks are
/// dropped individually.
#[instrument(level = "info", skip_all, fields(url = %config.url))]
pub async fn scrape(config: &ScrapeConfig) -> String {
    let html = match fetch(config).await {
        Ok(html) => html,
        Err(e) => {
            error!(error = %e, "Error scraping The Hacker News");
            return EMPTY_ARRAY.to_string();
        }
    };

    let today = Local::now().date_naive();
    let mut records = parse_listing(&html, config, today);
    KeywordMatcher::new(&config.keywords).apply(&mut records);

    info!(count = records.len(), "Scrape complete");
    to_json_array(&records)
}
