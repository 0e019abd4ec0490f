//! # Owner Identity
//!
//! This crate is the single authority for resolving requests to an owner
//! identity. Callers hand it an external identifier (a token subject, an
//! email, or the guest marker) and get back a persisted [`User`] whose id is
//! deterministic across restarts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use turso::{params, Database, Error as TursoError, Row};
use uuid::Uuid;

/// The identifier used for unauthenticated requests. Every request without a
/// token resolves to the same guest owner.
pub const GUEST_USER_IDENTIFIER: &str = "::guest::";

#[derive(Error, Debug)]
pub enum AccessError {
    #[error("Database error: {0}")]
    Database(#[from] TursoError),
    #[error("Failed to create or find user for identifier: {0}")]
    UserPersistenceFailed(String),
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),
}

/// An owner of guidelines, uploads, scrapes, and indexed chunks.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    /// Deterministic id (UUIDv5 of the external identifier).
    pub id: String,
    /// The timestamp when the user was first seen.
    pub created_at: DateTime<Utc>,
}

impl TryFrom<&Row> for User {
    type Error = AccessError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        let created_at_str: String = row.get(1)?;
        let created_at =
            chrono::NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S")
                .map(|ndt| DateTime::<Utc>::from_naive_utc_and_offset(ndt, Utc))
                .map_err(|e| {
                    AccessError::DataIntegrity(format!(
                        "Failed to parse date '{created_at_str}': {e}"
                    ))
                })?;

        Ok(User {
            id: row.get(0)?,
            created_at,
        })
    }
}

/// Derives the deterministic owner id for an external identifier.
pub fn owner_id_for(user_identifier: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, user_identifier.as_bytes()).to_string()
}

/// Finds a user by their external identifier (e.g. token subject), creating
/// them if they don't exist.
///
/// The primary key is a UUIDv5 of the identifier, so repeated calls are
/// idempotent and the same identifier always owns the same rows.
pub async fn get_or_create_user(
    db: &Database,
    user_identifier: &str,
) -> Result<User, AccessError> {
    let conn = db.connect()?;
    let user_id = owner_id_for(user_identifier);

    let mut rows = conn
        .query(
            "SELECT id, created_at FROM users WHERE id = ?",
            params![user_id.clone()],
        )
        .await?;

    if let Some(row) = rows.next().await? {
        return User::try_from(&row);
    }

    conn.execute("INSERT INTO users (id) VALUES (?)", params![user_id.clone()])
        .await?;

    let mut rows = conn
        .query(
            "SELECT id, created_at FROM users WHERE id = ?",
            params![user_id],
        )
        .await?;

    let row = rows
        .next()
        .await?
        .ok_or_else(|| AccessError::UserPersistenceFailed(user_identifier.to_string()))?;

    User::try_from(&row)
}
