//! Campaign-archive uploads: multipart file intake, parsing, and indexing.
//!
//! An upload is parsed exactly once; re-uploading creates a new record.
//! Each parsed item is indexed as a single chunk.

use super::{wrap_response, AppError, AppState};
use crate::auth::middleware::AuthenticatedUser;
use crate::types::{ApiResponse, DebugParams};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::Multipart;
use brandrag::ingest::parse_upload;
use brandrag::types::{FileKind, UploadRecord};
use brandrag::SourceType;
use serde_json::json;
use tracing::info;

/// Maximum accepted upload size.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub async fn uploads_list(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<Vec<UploadRecord>>>, AppError> {
    let uploads = app_state.store.list_uploads(&user.id).await?;
    let debug_info = json!({ "count": uploads.len() });
    Ok(wrap_response(uploads, debug_params, Some(debug_info)))
}

pub async fn upload_detail(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    debug_params: Query<DebugParams>,
    Path(upload_id): Path<i64>,
) -> Result<Json<ApiResponse<UploadRecord>>, AppError> {
    let upload = app_state
        .store
        .get_upload(&user.id, upload_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(wrap_response(upload, debug_params, None))
}

pub async fn upload_delete(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    debug_params: Query<DebugParams>,
    Path(upload_id): Path<i64>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let deleted = app_state.store.delete_upload(&user.id, upload_id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    app_state
        .store
        .delete_chunks(&user.id, SourceType::Upload, upload_id)
        .await?;
    Ok(wrap_response(
        json!({ "deleted": true }),
        debug_params,
        None,
    ))
}

/// Accepts `multipart/form-data` with a `file` field, size <= 5MB. The file
/// kind is detected from the extension; the raw bytes are decoded as UTF-8
/// with replacement.
pub async fn upload_file(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    debug_params: Query<DebugParams>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadRecord>>, AppError> {
    let mut file_bytes: Option<Vec<u8>> = None;
    let mut filename: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(anyhow::Error::from)? {
        if field.name() == Some("file") {
            filename = field.file_name().map(str::to_string);
            file_bytes = Some(field.bytes().await.map_err(anyhow::Error::from)?.to_vec());
        }
    }

    let file_bytes =
        file_bytes.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;
    let filename = filename.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;

    if file_bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::BadRequest("File too large (max 5MB)".to_string()));
    }

    let extension = filename.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    let file_kind = FileKind::from_extension(extension)
        .ok_or_else(|| AppError::BadRequest("Unsupported file type".to_string()))?;

    let raw_text = String::from_utf8_lossy(&file_bytes).to_string();
    let parsed_items = parse_upload(file_kind, &raw_text);

    let record = app_state
        .store
        .create_upload(&user.id, &filename, file_kind, &raw_text, &parsed_items)
        .await?;
    let chunk_count = app_state
        .store
        .reindex_upload_items(&user.id, record.id, &parsed_items)
        .await?;
    info!(
        upload_id = record.id,
        items = record.item_count,
        chunk_count,
        "Stored and indexed upload."
    );

    let debug_info = json!({
        "filename": record.filename,
        "size": file_bytes.len(),
        "chunks_indexed": chunk_count,
    });
    Ok(wrap_response(record, debug_params, Some(debug_info)))
}
