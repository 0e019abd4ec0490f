//! Website crawling: blog-post discovery and per-post text extraction.

use crate::extract::{discover_post_links, page_title, visible_text};
use crate::{ensure_scheme, fetch_html, ScrapeError};
use tracing::warn;

/// Maximum post URLs discovered from one index page.
pub const MAX_POST_URLS: usize = 15;

/// One fetched and extracted post.
#[derive(Debug, Clone)]
pub struct CrawledPost {
    pub url: String,
    pub title: String,
    pub text: String,
}

/// The result of crawling one website: the discovered post URLs (record
/// metadata) and the posts that were actually fetched and extracted.
#[derive(Debug, Clone)]
pub struct WebsiteCrawl {
    pub url: String,
    pub post_urls: Vec<String>,
    pub posts: Vec<CrawledPost>,
}

/// Validates and normalizes a user-supplied website URL.
pub fn normalize_website_url(raw: &str) -> Result<String, ScrapeError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(ScrapeError::InvalidUrl(
            "Please provide a valid website URL.".to_string(),
        ));
    }
    Ok(ensure_scheme(url))
}

/// Crawls a blog index URL: discovers post links, then fetches each post
/// sequentially. A failed or empty post is skipped; it never aborts the
/// batch.
pub async fn crawl_website(
    client: &reqwest::Client,
    raw_url: &str,
) -> Result<WebsiteCrawl, ScrapeError> {
    let url = normalize_website_url(raw_url)?;
    let index_html = fetch_html(client, &url).await?;
    let post_urls = discover_post_links(&index_html, &url, MAX_POST_URLS);

    let mut posts = Vec::new();
    for post_url in &post_urls {
        let html = match fetch_html(client, post_url).await {
            Ok(html) => html,
            Err(err) => {
                warn!("Skipping post {post_url}: {err}");
                continue;
            }
        };
        let text = visible_text(&html);
        if text.is_empty() {
            continue;
        }
        let title = page_title(&html).unwrap_or_else(|| post_url.clone());
        posts.push(CrawledPost {
            url: post_url.clone(),
            title,
            text,
        });
    }

    Ok(WebsiteCrawl {
        url,
        post_urls,
        posts,
    })
}
