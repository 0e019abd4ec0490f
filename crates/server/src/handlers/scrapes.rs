//! Scrape endpoints: LinkedIn, Trustpilot, and website crawling.
//!
//! Scraping degrades gracefully: an upstream failure becomes an explanatory
//! client response, never an unhandled error. Website crawls stage their
//! chunks in memory and commit the new corpus atomically, replacing the
//! previous one.

use super::{wrap_response, AppError, AppState};
use crate::auth::middleware::AuthenticatedUser;
use crate::types::{ApiResponse, DebugParams};
use axum::{
    extract::{Query, State},
    Json,
};
use brandrag::chunk::{split_text, DEFAULT_CHUNK_CHARS};
use brandrag::embed::embed;
use brandrag::providers::db::sqlite::StagedChunk;
use brandrag_scrape::{crawl_website, scrape_linkedin, scrape_trustpilot, ScrapeError};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

/// Number of preview texts returned with scrape responses.
const PREVIEW_LIMIT: usize = 20;
/// Character cap for the single LinkedIn preview snippet.
const LINKEDIN_PREVIEW_CHARS: usize = 1000;

#[derive(Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: String,
}

/// Upstream scrape failures become 400s with the scraper's explanation.
fn scrape_error_response(err: ScrapeError) -> AppError {
    AppError::BadRequest(err.to_string())
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

// --- LinkedIn ---

pub async fn linkedin_latest(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let result = match app_state.store.latest_linkedin_scrape(&user.id).await? {
        Some(record) => {
            let preview = truncate_chars(&record.content, LINKEDIN_PREVIEW_CHARS);
            let mut value = serde_json::to_value(&record).map_err(brandrag::PipelineError::from)?;
            value["preview_texts"] = json!([preview]);
            value
        }
        None => json!({ "detail": "No LinkedIn scrape found" }),
    };
    Ok(wrap_response(result, debug_params, None))
}

pub async fn linkedin_scrape_handler(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    debug_params: Query<DebugParams>,
    Json(payload): Json<ScrapeRequest>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let capture = scrape_linkedin(&app_state.scrape_client, &payload.url)
        .await
        .map_err(scrape_error_response)?;

    let record = app_state
        .store
        .insert_linkedin_scrape(&user.id, &capture.url, &capture.text)
        .await?;
    info!(scrape_id = record.id, "Stored LinkedIn scrape.");

    let preview = truncate_chars(&record.content, LINKEDIN_PREVIEW_CHARS);
    let mut value = serde_json::to_value(&record).map_err(brandrag::PipelineError::from)?;
    value["preview_texts"] = json!([preview]);

    let debug_info = json!({ "url": capture.url, "text_length": record.content.len() });
    Ok(wrap_response(value, debug_params, Some(debug_info)))
}

// --- Trustpilot ---

pub async fn trustpilot_latest(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let result = match app_state.store.latest_trustpilot_scrape(&user.id).await? {
        Some(record) => {
            let previews: Vec<&str> = record.content.lines().take(PREVIEW_LIMIT).collect();
            let mut value = serde_json::to_value(&record).map_err(brandrag::PipelineError::from)?;
            value["preview_texts"] = json!(previews);
            value
        }
        None => json!({ "detail": "No Trustpilot scrape found" }),
    };
    Ok(wrap_response(result, debug_params, None))
}

pub async fn trustpilot_scrape_handler(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    debug_params: Query<DebugParams>,
    Json(payload): Json<ScrapeRequest>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let capture = scrape_trustpilot(&app_state.scrape_client, &payload.url)
        .await
        .map_err(scrape_error_response)?;

    let record = app_state
        .store
        .insert_trustpilot_scrape(&user.id, &capture.url, &capture.text)
        .await?;
    info!(scrape_id = record.id, "Stored Trustpilot scrape.");

    let previews: Vec<&str> = record.content.lines().take(PREVIEW_LIMIT).collect();
    let mut value = serde_json::to_value(&record).map_err(brandrag::PipelineError::from)?;
    value["preview_texts"] = json!(previews);

    let debug_info = json!({ "url": capture.url, "lines": previews.len() });
    Ok(wrap_response(value, debug_params, Some(debug_info)))
}

// --- Website ---

pub async fn website_latest(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let result = match app_state.store.latest_website_scrape(&user.id).await? {
        Some(record) => {
            let previews = app_state
                .store
                .website_chunk_texts(&user.id, record.id, PREVIEW_LIMIT)
                .await?;
            let mut value = serde_json::to_value(&record).map_err(brandrag::PipelineError::from)?;
            value["preview_texts"] = json!(previews);
            value
        }
        None => json!({ "detail": "No Website scrape found" }),
    };
    Ok(wrap_response(result, debug_params, None))
}

/// Crawls a blog index URL, extracts and chunks each discovered post, and
/// commits the chunks as the owner's single live website corpus.
pub async fn website_scrape_handler(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    debug_params: Query<DebugParams>,
    Json(payload): Json<ScrapeRequest>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let crawl = crawl_website(&app_state.scrape_client, &payload.url)
        .await
        .map_err(scrape_error_response)?;

    // Stage all chunks in memory; they are written under the real record id
    // in one transaction when the corpus is committed.
    let mut staged = Vec::new();
    for post in &crawl.posts {
        for piece in split_text(&post.text, DEFAULT_CHUNK_CHARS) {
            let vector = embed(&piece);
            staged.push(StagedChunk {
                text: piece,
                vector,
            });
        }
    }

    let record = app_state
        .store
        .replace_website_corpus(&user.id, &crawl.url, &crawl.post_urls, &staged)
        .await?;
    info!(
        scrape_id = record.id,
        posts = crawl.posts.len(),
        chunks = staged.len(),
        "Replaced website corpus."
    );

    let previews: Vec<&str> = staged
        .iter()
        .take(PREVIEW_LIMIT)
        .map(|chunk| chunk.text.as_str())
        .collect();
    let mut value = serde_json::to_value(&record).map_err(brandrag::PipelineError::from)?;
    value["preview_texts"] = json!(previews);

    let debug_info = json!({
        "url": crawl.url,
        "post_urls": crawl.post_urls,
        "posts_fetched": crawl.posts.len(),
        "chunks_indexed": staged.len(),
    });
    Ok(wrap_response(value, debug_params, Some(debug_info)))
}
