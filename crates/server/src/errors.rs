use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use brandrag::PipelineError;
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// Encapsulates the error kinds that can occur within the server so they can
/// be converted into appropriate HTTP responses with `{"error": ...}` bodies.
pub enum AppError {
    /// Errors originating from the core pipeline.
    Pipeline(PipelineError),
    /// Invalid caller input, rejected before any I/O.
    BadRequest(String),
    /// A record the caller referenced does not exist (or is not theirs).
    NotFound,
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        AppError::Pipeline(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Pipeline(err) => {
                error!("PipelineError: {:?}", err);
                match err {
                    PipelineError::AiRequest(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Request to generation backend failed: {e}"),
                    ),
                    PipelineError::AiDeserialization(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Failed to deserialize generation backend response: {e}"),
                    ),
                    PipelineError::AiApi(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Generation backend error: {e}"),
                    ),
                    PipelineError::AiEmptyCompletion => (
                        StatusCode::BAD_GATEWAY,
                        "Generation backend returned no usable text.".to_string(),
                    ),
                    PipelineError::MissingApiKey => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Server is not configured correctly.".to_string(),
                    ),
                    PipelineError::SearchRequest(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Request to web search failed: {e}"),
                    ),
                    PipelineError::SearchDeserialization(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Failed to deserialize web search response: {e}"),
                    ),
                    PipelineError::SearchApi(e) => {
                        (StatusCode::BAD_GATEWAY, format!("Web search error: {e}"))
                    }
                    PipelineError::StorageConnection(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Storage connection error: {e}"),
                    ),
                    PipelineError::StorageOperationFailed(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Storage operation failed: {e}"),
                    ),
                    PipelineError::Database(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Database error: {e}"),
                    ),
                    PipelineError::Regex(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Internal regex error: {e}"),
                    ),
                    PipelineError::JsonSerialization(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Failed to serialize result: {e}"),
                    ),
                    PipelineError::ReqwestClientBuild(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Failed to build HTTP client: {e}"),
                    ),
                }
            }
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
