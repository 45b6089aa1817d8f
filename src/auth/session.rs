use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};
use chrono::{Duration, Utc};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated principal resolved from a bearer token.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

pub async fn create_session(
    db: &SqlitePool,
    user_id: &str,
    ttl_hours: i64,
) -> Result<String, AppError> {
    let token = Uuid::new_v4().to_string();
    let expires_at = Utc::now() + Duration::hours(ttl_hours);

    sqlx::query("INSERT INTO sessions (token, user_id, expires_at) VALUES (?, ?, ?)")
        .bind(&token)
        .bind(user_id)
        .bind(expires_at)
        .execute(db)
        .await?;

    Ok(token)
}

pub async fn delete_session(db: &SqlitePool, token: &str) -> Result<(), AppError> {
    sqlx::query("DELETE FROM sessions WHERE token = ?")
        .bind(token)
        .execute(db)
        .await?;

    Ok(())
}

pub async fn delete_expired(db: &SqlitePool) -> Result<u64, AppError> {
    let removed = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
        .bind(Utc::now())
        .execute(db)
        .await?
        .rows_affected();

    Ok(removed)
}

/// Expired sessions are treated as absent; the sweeper removes them later.
pub async fn resolve_token(
    db: &SqlitePool,
    token: &str,
) -> Result<Option<CurrentUser>, AppError> {
    let user = sqlx::query_as::<_, CurrentUser>(
        "SELECT u.id, u.email, u.name \
         FROM sessions s JOIN users u ON u.id = s.user_id \
         WHERE s.token = ? AND s.expires_at > ?",
    )
    .bind(token)
    .bind(Utc::now())
    .fetch_optional(db)
    .await?;

    Ok(user)
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AppError::Unauthorized)?;
        resolve_token(&state.db, token)
            .await?
            .ok_or(AppError::Unauthorized)
    }
}
