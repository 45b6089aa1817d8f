use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::models::{CompleteTaskRequest, NewTaskRequest, TaskWithNodes};
use crate::services::TaskService;
use crate::state::AppState;

pub async fn list_tasks(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<TaskWithNodes>>, AppError> {
    let tasks = TaskService::new(state.db.clone()).list_tasks(&user.id).await?;
    Ok(Json(tasks))
}

pub async fn create_task(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<NewTaskRequest>,
) -> Result<Json<TaskWithNodes>, AppError> {
    let task = TaskService::new(state.db.clone())
        .create_task(&user.id, &req.name)
        .await?;
    Ok(Json(task))
}

pub async fn complete_task(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CompleteTaskRequest>,
) -> Result<Json<Value>, AppError> {
    TaskService::new(state.db.clone())
        .complete_task(&user.id, &req.task_id)
        .await?;
    Ok(Json(json!({ "success": true })))
}
