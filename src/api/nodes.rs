use axum::extract::{Query, State};
use axum::Json;
use serde_json::{Value, json};

use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::models::{DeleteNodeParams, InsertNodeRequest, TaskNode, UpdateNodeRequest};
use crate::services::TaskService;
use crate::state::AppState;

pub async fn insert_node(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<InsertNodeRequest>,
) -> Result<Json<TaskNode>, AppError> {
    let node = TaskService::new(state.db.clone())
        .insert_node_after(&user.id, &req.task_id, &req.after_node_id)
        .await?;
    Ok(Json(node))
}

pub async fn update_node(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<UpdateNodeRequest>,
) -> Result<Json<Value>, AppError> {
    TaskService::new(state.db.clone())
        .update_node(&user.id, req)
        .await?;
    Ok(Json(json!({ "success": true })))
}

pub async fn delete_node(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(params): Query<DeleteNodeParams>,
) -> Result<Json<Value>, AppError> {
    TaskService::new(state.db.clone())
        .delete_node(&user.id, &params.node_id)
        .await?;
    Ok(Json(json!({ "success": true })))
}
