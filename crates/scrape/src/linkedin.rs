//! LinkedIn company-page scraping.

use crate::extract::visible_text;
use crate::{cap_chars, ensure_scheme, fetch_html, ScrapeError, SCRAPE_TEXT_CAP};
use regex::Regex;
use std::sync::OnceLock;
use tracing::info;

/// The extracted text of one LinkedIn page fetch.
#[derive(Debug, Clone)]
pub struct LinkedInCapture {
    pub url: String,
    pub text: String,
}

fn login_wall_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)LinkedIn\s+Login|Sign in \| LinkedIn").expect("valid pattern")
    })
}

/// Validates and normalizes a user-supplied LinkedIn URL. Tolerates leading
/// `@` copy-pastes and missing schemes.
pub fn normalize_linkedin_url(raw: &str) -> Result<String, ScrapeError> {
    let url = raw.trim().trim_start_matches(['@', ' ']);
    if url.is_empty() || !url.contains("linkedin.com") {
        return Err(ScrapeError::InvalidUrl(
            "Please provide a valid LinkedIn URL.".to_string(),
        ));
    }
    Ok(ensure_scheme(url))
}

/// The company root URL (`…/company/{slug}`) for a deeper company page, used
/// as a fallback when the original page is behind a login wall.
fn company_root_url(url: &str) -> Option<String> {
    let parsed = reqwest::Url::parse(url).ok()?;
    let segments: Vec<&str> = parsed.path_segments()?.collect();
    let company_index = segments.iter().position(|s| *s == "company")?;
    let slug = segments.get(company_index + 1)?;
    if slug.is_empty() {
        return None;
    }
    let host = parsed.host_str()?;
    Some(format!("{}://{host}/company/{slug}", parsed.scheme()))
}

/// Fetches a LinkedIn page and extracts its visible text.
///
/// When the page is clearly a login wall, the company root page is tried
/// once as a fallback. Empty extraction is an explicit error so the caller
/// can explain it to the user.
pub async fn scrape_linkedin(
    client: &reqwest::Client,
    raw_url: &str,
) -> Result<LinkedInCapture, ScrapeError> {
    let url = normalize_linkedin_url(raw_url)?;
    let html = fetch_html(client, &url).await?;
    let mut text = visible_text(&html);

    if login_wall_pattern().is_match(&text) {
        if let Some(fallback_url) = company_root_url(&url) {
            info!("LinkedIn login wall detected; trying company root {fallback_url}");
            if let Ok(fallback_html) = fetch_html(client, &fallback_url).await {
                let fallback_text = visible_text(&fallback_html);
                if !fallback_text.is_empty() {
                    text = fallback_text;
                }
            }
        }
    }

    if text.is_empty() {
        return Err(ScrapeError::NoContent(
            "LinkedIn returned no public content; try a public About page or paste text manually."
                .to_string(),
        ));
    }

    Ok(LinkedInCapture {
        url,
        text: cap_chars(text, SCRAPE_TEXT_CAP),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_linkedin_urls() {
        assert!(normalize_linkedin_url("https://example.com").is_err());
        assert!(normalize_linkedin_url("").is_err());
    }

    #[test]
    fn tolerates_at_prefix_and_missing_scheme() {
        assert_eq!(
            normalize_linkedin_url("@linkedin.com/company/acme").unwrap(),
            "https://linkedin.com/company/acme"
        );
        assert_eq!(
            normalize_linkedin_url("https://www.linkedin.com/company/acme/posts").unwrap(),
            "https://www.linkedin.com/company/acme/posts"
        );
    }

    #[test]
    fn company_root_is_derived_from_deep_pages() {
        assert_eq!(
            company_root_url("https://www.linkedin.com/company/acme/posts/?feedView=all")
                .as_deref(),
            Some("https://www.linkedin.com/company/acme")
        );
        assert!(company_root_url("https://www.linkedin.com/feed/").is_none());
    }
}
