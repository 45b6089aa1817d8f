mod common;

use stepline::auth::{self, session};
use stepline::error::AppError;
use stepline::models::{LoginRequest, RegisterRequest};

fn register_req(email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        password: password.to_string(),
        name: None,
    }
}

fn login_req(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn register_then_login_resolves_a_principal() {
    let pool = common::setup_pool().await;

    let user = auth::register(&pool, register_req("Alice@Example.com", "secret99"))
        .await
        .expect("Failed to register");
    assert_eq!(user.email, "alice@example.com");
    // Name falls back to the email local part.
    assert_eq!(user.name.as_deref(), Some("alice"));
    assert!(user.email_verified.is_some());

    let (token, logged_in) = auth::login(&pool, login_req("alice@example.com", "secret99"), 24)
        .await
        .expect("Failed to log in");
    assert_eq!(logged_in.id, user.id);

    let principal = session::resolve_token(&pool, &token)
        .await
        .expect("Failed to resolve token")
        .expect("no principal");
    assert_eq!(principal.id, user.id);
    assert_eq!(principal.email, "alice@example.com");
}

#[tokio::test]
async fn register_duplicate_email_is_a_conflict() {
    let pool = common::setup_pool().await;

    auth::register(&pool, register_req("alice@example.com", "secret99"))
        .await
        .expect("Failed to register");

    let err = auth::register(&pool, register_req("alice@example.com", "other-pass"))
        .await
        .expect_err("register should fail");
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn register_validates_inputs() {
    let pool = common::setup_pool().await;

    let err = auth::register(&pool, register_req("", "secret99"))
        .await
        .expect_err("register should fail");
    assert!(matches!(err, AppError::Validation(_)));

    let err = auth::register(&pool, register_req("alice@example.com", ""))
        .await
        .expect_err("register should fail");
    assert!(matches!(err, AppError::Validation(_)));

    let err = auth::register(&pool, register_req("alice@example.com", "short"))
        .await
        .expect_err("register should fail");
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn login_failures_are_uniform() {
    let pool = common::setup_pool().await;

    auth::register(&pool, register_req("alice@example.com", "secret99"))
        .await
        .expect("Failed to register");

    let err = auth::login(&pool, login_req("alice@example.com", "wrong-pass"), 24)
        .await
        .expect_err("login should fail");
    assert!(matches!(err, AppError::Unauthorized));

    let err = auth::login(&pool, login_req("nobody@example.com", "secret99"), 24)
        .await
        .expect_err("login should fail");
    assert!(matches!(err, AppError::Unauthorized));

    // Accounts without a password (OAuth-only rows) fail the same way.
    let passwordless = common::seed_user(&pool, "carol@example.com").await;
    let err = auth::login(&pool, login_req(&passwordless.email, "secret99"), 24)
        .await
        .expect_err("login should fail");
    assert!(matches!(err, AppError::Unauthorized));
}

#[tokio::test]
async fn logout_invalidates_the_session() {
    let pool = common::setup_pool().await;

    auth::register(&pool, register_req("alice@example.com", "secret99"))
        .await
        .expect("Failed to register");
    let (token, _) = auth::login(&pool, login_req("alice@example.com", "secret99"), 24)
        .await
        .expect("Failed to log in");

    session::delete_session(&pool, &token)
        .await
        .expect("Failed to delete session");

    let principal = session::resolve_token(&pool, &token)
        .await
        .expect("Failed to resolve token");
    assert!(principal.is_none());

    // A second logout is a no-op.
    session::delete_session(&pool, &token)
        .await
        .expect("Failed to delete session");
}

#[tokio::test]
async fn expired_sessions_are_rejected_and_swept() {
    let pool = common::setup_pool().await;
    let user = common::seed_user(&pool, "alice@example.com").await;

    let token = session::create_session(&pool, &user.id, -1)
        .await
        .expect("Failed to create session");

    let principal = session::resolve_token(&pool, &token)
        .await
        .expect("Failed to resolve token");
    assert!(principal.is_none());

    let removed = session::delete_expired(&pool).await.expect("Failed to sweep");
    assert_eq!(removed, 1);

    let removed = session::delete_expired(&pool).await.expect("Failed to sweep");
    assert_eq!(removed, 0);
}
