use chrono::Utc;
use sqlx::{Sqlite, Transaction};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{DEFAULT_NODE_DESCRIPTION, TaskNode};

/// Insert a fresh node immediately after `after_node_id`, shifting every
/// node at or past the freed slot up by one. Runs inside the caller's
/// transaction; order values within the task stay unique throughout.
pub async fn insert_after(
    tx: &mut Transaction<'_, Sqlite>,
    task_id: &str,
    after_node_id: &str,
) -> Result<TaskNode, AppError> {
    // The after-node must live in this task, not merely exist.
    let after_order: Option<i64> = sqlx::query_scalar(
        r#"SELECT "order" FROM task_nodes WHERE id = ? AND task_id = ?"#,
    )
    .bind(after_node_id)
    .bind(task_id)
    .fetch_optional(&mut **tx)
    .await?;

    let Some(after_order) = after_order else {
        return Err(AppError::NotFound);
    };
    let new_order = after_order + 1;

    // Inserting after the last node shifts nothing.
    sqlx::query(
        r#"UPDATE task_nodes SET "order" = "order" + 1 WHERE task_id = ? AND "order" >= ?"#,
    )
    .bind(task_id)
    .bind(new_order)
    .execute(&mut **tx)
    .await?;

    let now = Utc::now();
    let node = TaskNode {
        id: Uuid::new_v4().to_string(),
        task_id: task_id.to_string(),
        description: DEFAULT_NODE_DESCRIPTION.to_string(),
        is_completed: false,
        completed_at: None,
        note: None,
        order: new_order,
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        r#"INSERT INTO task_nodes (id, task_id, description, is_completed, completed_at, note, "order", created_at, updated_at)
           VALUES (?, ?, ?, 0, NULL, NULL, ?, ?, ?)"#,
    )
    .bind(&node.id)
    .bind(&node.task_id)
    .bind(&node.description)
    .bind(node.order)
    .bind(node.created_at)
    .bind(node.updated_at)
    .execute(&mut **tx)
    .await?;

    Ok(node)
}
