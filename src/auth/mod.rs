pub mod password;
pub mod session;

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::db::repository;
use crate::error::AppError;
use crate::models::{LoginRequest, RegisterRequest, User};

pub use session::CurrentUser;

const MIN_PASSWORD_LEN: usize = 6;

pub async fn register(db: &SqlitePool, req: RegisterRequest) -> Result<User, AppError> {
    let email = req.email.trim().to_lowercase();
    if email.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    }
    if req.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    if repository::find_user_by_email(db, &email).await?.is_some() {
        return Err(AppError::Conflict("Email is already registered".to_string()));
    }

    let name = req
        .name
        .filter(|n| !n.trim().is_empty())
        .or_else(|| email.split('@').next().map(str::to_string));

    let password_hash = password::hash_password(&req.password)?;

    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4().to_string(),
        email,
        name,
        password_hash: Some(password_hash),
        // No verification mail flow; accounts are usable immediately.
        email_verified: Some(now),
        created_at: now,
        updated_at: now,
    };

    repository::insert_user(db, &user).await?;
    info!("registered user {}", user.id);

    Ok(user)
}

/// Verify credentials and open a session. Unknown emails, passwordless
/// accounts, and wrong passwords all fail the same way.
pub async fn login(
    db: &SqlitePool,
    req: LoginRequest,
    ttl_hours: i64,
) -> Result<(String, User), AppError> {
    let email = req.email.trim().to_lowercase();

    let user = repository::find_user_by_email(db, &email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let hash = user.password_hash.as_deref().ok_or(AppError::Unauthorized)?;
    if !password::verify_password(&req.password, hash) {
        return Err(AppError::Unauthorized);
    }

    let token = session::create_session(db, &user.id, ttl_hours).await?;
    info!("user {} logged in", user.id);

    Ok((token, user))
}
