use axum::http::{HeaderMap, StatusCode};
use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::auth::{self, session};
use crate::error::AppError;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest};
use crate::state::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<Value>, AppError> {
    auth::register(&state.db, req).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Registration complete, please log in"
    })))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (token, user) = auth::login(&state.db, req, state.config.session_ttl_hours).await?;
    Ok(Json(LoginResponse { token, user }))
}

pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let token = session::bearer_token(&headers).ok_or(AppError::Unauthorized)?;
    session::delete_session(&state.db, token).await?;
    Ok(StatusCode::NO_CONTENT)
}
