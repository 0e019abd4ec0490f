//! Ranked chunk retrieval across all of an owner's indexed sources.

use super::{wrap_response, AppError, AppState};
use crate::auth::middleware::AuthenticatedUser;
use crate::types::{ApiResponse, DebugParams};
use axum::{
    extract::{Query, State},
    Json,
};
use brandrag::compose::DEFAULT_TOP_K;
use brandrag::rank::rank_with_scores;
use brandrag::types::RetrievedChunk;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use tracing::info;

#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub top_k: Option<usize>,
}

pub async fn search_handler(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    debug_params: Query<DebugParams>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<ApiResponse<Vec<RetrievedChunk>>>, AppError> {
    if payload.query.trim().is_empty() {
        return Err(AppError::BadRequest("Missing query".to_string()));
    }
    let top_k = payload.top_k.unwrap_or(DEFAULT_TOP_K);
    info!("Received chunk search for query: '{}'", payload.query);

    let chunks = app_state.store.list_chunks(&user.id).await?;
    let candidates: Vec<(i64, Vec<f32>)> = chunks
        .iter()
        .map(|chunk| (chunk.id, chunk.vector.clone()))
        .collect();
    let ranked = rank_with_scores(&payload.query, &candidates, top_k);

    let by_id: HashMap<i64, _> = chunks.iter().map(|chunk| (chunk.id, chunk)).collect();
    let results: Vec<RetrievedChunk> = ranked
        .into_iter()
        .filter_map(|(id, score)| {
            by_id.get(&id).map(|chunk| RetrievedChunk {
                id: chunk.id,
                source_type: chunk.source_type,
                source_id: chunk.source_id,
                text: chunk.text.clone(),
                score: Some(score),
            })
        })
        .collect();

    let debug_info = json!({
        "query": payload.query,
        "top_k": top_k,
        "candidates": candidates.len(),
    });
    Ok(wrap_response(results, debug_params, Some(debug_info)))
}
