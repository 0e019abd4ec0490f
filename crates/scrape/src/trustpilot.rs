//! Trustpilot review-page scraping.

use crate::extract::review_lines;
use crate::{cap_chars, ensure_scheme, fetch_html, ScrapeError, SCRAPE_TEXT_CAP};

/// The extracted review text of one Trustpilot page fetch, one review line
/// per newline.
#[derive(Debug, Clone)]
pub struct TrustpilotCapture {
    pub url: String,
    pub text: String,
}

/// Validates and normalizes a user-supplied Trustpilot URL.
pub fn normalize_trustpilot_url(raw: &str) -> Result<String, ScrapeError> {
    let url = raw.trim();
    if url.is_empty() || !url.contains("trustpilot.com") {
        return Err(ScrapeError::InvalidUrl(
            "Please provide a valid Trustpilot URL.".to_string(),
        ));
    }
    Ok(ensure_scheme(url))
}

/// Fetches a Trustpilot page and extracts review-like text lines.
pub async fn scrape_trustpilot(
    client: &reqwest::Client,
    raw_url: &str,
) -> Result<TrustpilotCapture, ScrapeError> {
    let url = normalize_trustpilot_url(raw_url)?;
    let html = fetch_html(client, &url).await?;
    let text = review_lines(&html).join("\n");

    if text.is_empty() {
        return Err(ScrapeError::NoContent(
            "No review content could be extracted from this page.".to_string(),
        ));
    }

    Ok(TrustpilotCapture {
        url,
        text: cap_chars(text, SCRAPE_TEXT_CAP),
    })
}
