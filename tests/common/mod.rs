#![allow(dead_code)]

use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use uuid::Uuid;

use stepline::config::Config;
use stepline::db::repository;
use stepline::models::User;
use stepline::state::AppState;

pub async fn setup_pool() -> SqlitePool {
    // One connection: every pooled connection to `sqlite::memory:` opens its
    // own database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn seed_user(pool: &SqlitePool, email: &str) -> User {
    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4().to_string(),
        email: email.to_string(),
        name: Some("Tester".to_string()),
        password_hash: None,
        email_verified: Some(now),
        created_at: now,
        updated_at: now,
    };

    repository::insert_user(pool, &user)
        .await
        .expect("Failed to insert user");

    user
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        bind_addr: "127.0.0.1:0".parse().expect("bad bind addr"),
        session_ttl_hours: 24,
        session_sweep_interval_secs: 3600,
    }
}

pub fn test_state(pool: SqlitePool) -> AppState {
    AppState {
        db: pool,
        config: test_config(),
    }
}
