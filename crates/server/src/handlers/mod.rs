//! # API Route Handlers
//!
//! Handlers are split into logical sub-modules (guidelines, uploads,
//! scrapes, search, generation) and re-exported under a single `handlers::`
//! path for the router.

pub mod general;
pub mod generation;
pub mod guidelines;
pub mod scrapes;
pub mod search;
pub mod uploads;

pub use general::*;
pub use generation::*;
pub use guidelines::*;
pub use scrapes::*;
pub use search::*;
pub use uploads::*;

use super::{
    errors::AppError,
    state::AppState,
    types::{ApiResponse, DebugParams},
};
use axum::{extract::Query, Json};
use serde_json::Value;

/// Wraps a successful result in the standard `ApiResponse` envelope,
/// including debug information only when the caller requested it.
pub(crate) fn wrap_response<T>(
    result: T,
    debug_params: Query<DebugParams>,
    debug_info: Option<Value>,
) -> Json<ApiResponse<T>> {
    let debug = if debug_params.debug.unwrap_or(false) {
        debug_info
    } else {
        None
    };
    Json(ApiResponse { debug, result })
}
