use sqlx::SqlitePool;

use crate::db::repository;
use crate::error::AppError;
use crate::models::{Task, TaskNode};

/// Missing tasks and tasks owned by someone else are indistinguishable to
/// the caller: both come back as `Unauthorized`.
pub async fn require_task_owner(
    db: &SqlitePool,
    task_id: &str,
    user_id: &str,
) -> Result<Task, AppError> {
    match repository::find_task(db, task_id).await? {
        Some(task) if task.user_id == user_id => Ok(task),
        _ => Err(AppError::Unauthorized),
    }
}

/// A node that does not exist is `NotFound`; a node whose task belongs to
/// someone else is `Unauthorized`.
pub async fn require_node_owner(
    db: &SqlitePool,
    node_id: &str,
    user_id: &str,
) -> Result<TaskNode, AppError> {
    let node = repository::find_node(db, node_id)
        .await?
        .ok_or(AppError::NotFound)?;

    require_task_owner(db, &node.task_id, user_id).await?;

    Ok(node)
}
