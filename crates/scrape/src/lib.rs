//! # brandrag-scrape: external-source ingestors
//!
//! Fetches and extracts text from LinkedIn company pages, Trustpilot review
//! pages, and arbitrary websites. Each scraper validates its input URL,
//! fetches with an explicit timeout, extracts visible text with simple
//! heuristics, and caps the result. Website crawling isolates per-post fetch
//! failures so one bad URL never aborts the batch.

pub mod extract;
pub mod linkedin;
pub mod trustpilot;
pub mod website;

pub use linkedin::scrape_linkedin;
pub use trustpilot::scrape_trustpilot;
pub use website::{crawl_website, CrawledPost, WebsiteCrawl};

use thiserror::Error;

/// Upper bound on stored scrape text.
pub const SCRAPE_TEXT_CAP: usize = 20_000;

/// Errors surfaced by the scrapers. Callers convert these into explanatory
/// client responses rather than hard failures.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("{0}")]
    InvalidUrl(String),
    #[error("Failed to fetch page: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Failed to fetch page: {0}")]
    Status(u16),
    #[error("{0}")]
    NoContent(String),
}

/// Prefixes `https://` when the URL has no scheme.
pub(crate) fn ensure_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Fetches a page and returns its body, converting non-2xx statuses into
/// typed errors.
pub(crate) async fn fetch_html(
    client: &reqwest::Client,
    url: &str,
) -> Result<String, ScrapeError> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(ScrapeError::Status(response.status().as_u16()));
    }
    Ok(response.text().await?)
}

/// Truncates text to at most `max_chars` characters.
pub(crate) fn cap_chars(text: String, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text
    } else {
        text.chars().take(max_chars).collect()
    }
}
