//! Brand-guideline CRUD. Thin wrappers around storage, except that every
//! write triggers the reindex contract: derived chunks are replaced on
//! create/update and removed on delete.

use super::{wrap_response, AppError, AppState};
use crate::auth::middleware::AuthenticatedUser;
use crate::types::{ApiResponse, DebugParams};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use brandrag::types::{GuidelineCategory, GuidelineRecord};
use brandrag::SourceType;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

#[derive(Deserialize)]
pub struct GuidelineCreateRequest {
    pub title: String,
    pub content: String,
    pub category: String,
}

#[derive(Deserialize)]
pub struct GuidelineUpdateRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

fn parse_category(raw: &str) -> Result<GuidelineCategory, AppError> {
    GuidelineCategory::parse(raw).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Invalid category '{raw}'; expected one of tone, terminology, style, rules."
        ))
    })
}

pub async fn guidelines_list(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<Vec<GuidelineRecord>>>, AppError> {
    let guidelines = app_state.store.list_guidelines(&user.id).await?;
    let debug_info = json!({ "count": guidelines.len() });
    Ok(wrap_response(guidelines, debug_params, Some(debug_info)))
}

pub async fn guidelines_create(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    debug_params: Query<DebugParams>,
    Json(payload): Json<GuidelineCreateRequest>,
) -> Result<Json<ApiResponse<GuidelineRecord>>, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::BadRequest("Missing title".to_string()));
    }
    if payload.content.trim().is_empty() {
        return Err(AppError::BadRequest("Missing content".to_string()));
    }
    let category = parse_category(&payload.category)?;

    let record = app_state
        .store
        .create_guideline(&user.id, payload.title.trim(), &payload.content, category)
        .await?;
    let chunk_count = app_state.store.reindex_guideline(&record).await?;
    info!(guideline_id = record.id, chunk_count, "Created and indexed guideline.");

    let debug_info = json!({ "chunks_indexed": chunk_count });
    Ok(wrap_response(record, debug_params, Some(debug_info)))
}

pub async fn guideline_update(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    debug_params: Query<DebugParams>,
    Path(guideline_id): Path<i64>,
    Json(payload): Json<GuidelineUpdateRequest>,
) -> Result<Json<ApiResponse<GuidelineRecord>>, AppError> {
    let category = match payload.category.as_deref() {
        Some(raw) => Some(parse_category(raw)?),
        None => None,
    };

    let updated = app_state
        .store
        .update_guideline(
            &user.id,
            guideline_id,
            payload.title.as_deref(),
            payload.content.as_deref(),
            category,
        )
        .await?
        .ok_or(AppError::NotFound)?;

    let chunk_count = app_state.store.reindex_guideline(&updated).await?;
    let debug_info = json!({ "chunks_indexed": chunk_count });
    Ok(wrap_response(updated, debug_params, Some(debug_info)))
}

pub async fn guideline_delete(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    debug_params: Query<DebugParams>,
    Path(guideline_id): Path<i64>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let deleted = app_state
        .store
        .delete_guideline(&user.id, guideline_id)
        .await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    app_state
        .store
        .delete_chunks(&user.id, SourceType::Guideline, guideline_id)
        .await?;

    Ok(wrap_response(
        json!({ "deleted": true }),
        debug_params,
        None,
    ))
}
