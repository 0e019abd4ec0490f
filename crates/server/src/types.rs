use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The standard response envelope: the handler result, plus optional debug
/// internals when the caller asked for them with `?debug=true`.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<Value>,
    pub result: T,
}

/// Query parameters shared by all handlers.
#[derive(Deserialize, Default)]
pub struct DebugParams {
    pub debug: Option<bool>,
}
