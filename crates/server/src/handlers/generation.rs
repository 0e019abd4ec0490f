//! The generation endpoint: retrieval, composition, and the fallback chain.
//!
//! Retrieval runs independently per source type so each category's prompt
//! contribution stays bounded: uploads are ranked across all archives, while
//! website chunks are scoped to the owner's single live corpus. Guidelines
//! are never retrieval-filtered; they are included verbatim.

use super::{wrap_response, AppError, AppState};
use crate::auth::middleware::AuthenticatedUser;
use crate::types::{ApiResponse, DebugParams};
use axum::{
    extract::{Query, State},
    Json,
};
use brandrag::compose::{Channel, ComposeOptions, DEFAULT_TOP_K, WEB_RESULT_LIMIT};
use brandrag::providers::ai::AiProvider;
use brandrag::rank::rank_by_similarity;
use brandrag::types::{CandidateChunk, ReasoningEffort, WebSearchResult};
use brandrag::{run_generation, GenerationContext, GenerationOutcome, SourceType};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use tracing::{info, warn};

#[derive(Deserialize, Debug)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
    /// The target channel; invalid or missing values fall back to LinkedIn.
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub top_k: Option<usize>,
    #[serde(default)]
    pub use_web: Option<bool>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub links: Option<Vec<String>>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub reasoning_effort: Option<ReasoningEffort>,
}

/// Ranks candidates and returns their texts in ranked order.
fn ranked_texts(query: &str, candidates: &[CandidateChunk], top_k: usize) -> Vec<String> {
    let pairs: Vec<(i64, Vec<f32>)> = candidates
        .iter()
        .map(|candidate| (candidate.id, candidate.vector.clone()))
        .collect();
    let by_id: HashMap<i64, &str> = candidates
        .iter()
        .map(|candidate| (candidate.id, candidate.text.as_str()))
        .collect();
    rank_by_similarity(query, &pairs, top_k)
        .into_iter()
        .filter_map(|id| by_id.get(&id).map(|text| text.to_string()))
        .collect()
}

pub async fn generate_handler(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    debug_params: Query<DebugParams>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<ApiResponse<GenerationOutcome>>, AppError> {
    if payload.prompt.trim().is_empty() {
        return Err(AppError::BadRequest("Missing prompt".to_string()));
    }

    let options = ComposeOptions {
        channel: Channel::parse(payload.content_type.as_deref().unwrap_or_default()),
        top_k: payload.top_k.unwrap_or(DEFAULT_TOP_K),
        use_web: payload.use_web.unwrap_or(false),
        company: payload.company.clone(),
        links: payload.links.clone().unwrap_or_default(),
        model: payload.model.clone(),
        reasoning_effort: payload.reasoning_effort,
    };
    info!(
        channel = options.channel.as_str(),
        top_k = options.top_k,
        use_web = options.use_web,
        "Received generation request."
    );

    // --- Retrieval, independently per source type ---
    let guidelines = app_state.store.guidelines_by_category(&user.id).await?;

    let upload_candidates = app_state
        .store
        .chunk_candidates(&user.id, SourceType::Upload, None)
        .await?;
    let upload_examples = ranked_texts(&payload.prompt, &upload_candidates, options.top_k);

    let website_excerpts = match app_state.store.latest_website_scrape(&user.id).await? {
        Some(scrape) => {
            let candidates = app_state
                .store
                .chunk_candidates(&user.id, SourceType::Website, Some(scrape.id))
                .await?;
            ranked_texts(&payload.prompt, &candidates, options.top_k)
        }
        None => Vec::new(),
    };

    let linkedin_context = app_state
        .store
        .latest_linkedin_scrape(&user.id)
        .await?
        .map(|record| record.content);

    // Web search is best-effort: failures degrade to no results.
    let web_results: Vec<WebSearchResult> = if options.use_web {
        let query = match options.company.as_deref() {
            Some(company) if !company.trim().is_empty() => {
                format!("{} {}", company.trim(), payload.prompt.trim())
            }
            _ => payload.prompt.trim().to_string(),
        };
        match app_state.web_search.search(&query, WEB_RESULT_LIMIT).await {
            Ok(results) => results,
            Err(err) => {
                warn!("Web search failed ({err}); continuing without results.");
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    // --- Composition + generation with the fallback chain ---
    let provider_override = app_state.ai_provider.as_ref().map(|provider| {
        let mut provider = provider.as_ref().clone();
        if let Some(model) = &payload.model {
            provider = provider.with_model(model.clone());
        }
        provider.with_reasoning_effort(payload.reasoning_effort)
    });

    let context = GenerationContext {
        guidelines,
        upload_examples,
        website_excerpts,
        linkedin_context,
        web_results,
    };
    let outcome = run_generation(
        provider_override.as_ref().map(|p| p as &dyn AiProvider),
        &payload.prompt,
        context,
        &options,
    )
    .await;

    let debug_info = json!({
        "channel": options.channel.as_str(),
        "top_k": options.top_k,
        "upload_candidates": upload_candidates.len(),
        "source": outcome.source,
    });
    Ok(wrap_response(outcome, debug_params, Some(debug_info)))
}
