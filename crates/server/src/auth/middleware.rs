//! # Authentication Middleware
//!
//! Token issuance is external to this service; this module only resolves
//! each request to an owner. The `AuthenticatedUser` extractor accepts an
//! optional `Authorization: Bearer <token>` header:
//!
//! 1. No token: the request resolves to the deterministic guest owner.
//! 2. Valid token: the request resolves to the user behind the token's
//!    subject.
//! 3. Invalid or expired token: the request is rejected with 401.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use brandrag_access::{get_or_create_user, User, GUEST_USER_IDENTIFIER};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, warn};

use crate::state::AppState;

const DEFAULT_JWT_SECRET: &str = "a-secure-secret-key";

/// The claims expected in a bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The subject; used as the external owner identifier.
    pub sub: String,
    /// The expiration timestamp.
    pub exp: usize,
}

/// An Axum extractor providing the owner of the current request, guest or
/// authenticated.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

/// A custom rejection type for authentication failures.
pub struct AuthError(StatusCode, String);

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.0, Json(json!({ "error": self.1 }))).into_response()
    }
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let bearer_header =
            Option::<TypedHeader<Authorization<Bearer>>>::from_request_parts(parts, state)
                .await
                .map_err(|e| {
                    warn!("Unexpected error during header extraction: {}", e);
                    AuthError(
                        StatusCode::BAD_REQUEST,
                        "Invalid Authorization header format.".to_string(),
                    )
                })?;

        let identifier = if let Some(TypedHeader(Authorization(bearer))) = bearer_header {
            let jwt_secret = state
                .config
                .jwt_secret
                .clone()
                .unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string());

            let token_data = decode::<Claims>(
                bearer.token(),
                &DecodingKey::from_secret(jwt_secret.as_ref()),
                &Validation::default(),
            )
            .map_err(|e| {
                warn!("JWT validation failed: {}", e);
                AuthError(
                    StatusCode::UNAUTHORIZED,
                    "Invalid or expired token.".to_string(),
                )
            })?;

            token_data.claims.sub
        } else {
            GUEST_USER_IDENTIFIER.to_string()
        };

        let user = get_or_create_user(&state.store.db, &identifier)
            .await
            .map_err(|e| {
                error!("Failed to get or create user: {}", e);
                AuthError(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Could not resolve request owner: {e}"),
                )
            })?;

        Ok(AuthenticatedUser(user))
    }
}
