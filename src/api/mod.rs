pub mod auth;
pub mod nodes;
pub mod tasks;

use axum::routing::{get, post};
use axum::{Router, extract::State, http::StatusCode};

use crate::error::AppError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route("/tasks/complete", post(tasks::complete_task))
        .route(
            "/nodes",
            post(nodes::insert_node)
                .patch(nodes::update_node)
                .delete(nodes::delete_node),
        )
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}
