use thiserror::Error;

/// Custom error types for the content pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to generation API: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize generation API response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("Generation API returned an error: {0}")]
    AiApi(String),
    #[error("Generation API returned no usable text")]
    AiEmptyCompletion,
    #[error("API key is missing")]
    MissingApiKey,
    #[error("Failed to send request to web search API: {0}")]
    SearchRequest(reqwest::Error),
    #[error("Failed to deserialize web search API response: {0}")]
    SearchDeserialization(reqwest::Error),
    #[error("Web search API returned an error: {0}")]
    SearchApi(String),
    #[error("Storage connection error: {0}")]
    StorageConnection(String),
    #[error("Storage operation failed: {0}")]
    StorageOperationFailed(String),
    #[error("Database error: {0}")]
    Database(#[from] turso::Error),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}
