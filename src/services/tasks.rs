use std::collections::HashMap;

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::db::repository;
use crate::error::AppError;
use crate::models::{
    DEFAULT_NODE_DESCRIPTION, Task, TaskNode, TaskWithNodes, UpdateNodeRequest,
};
use crate::services::{access, ordering};

pub struct TaskService {
    db: SqlitePool,
}

impl TaskService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Create a task together with its initial node at order 0. A task is
    /// never without nodes.
    pub async fn create_task(&self, user_id: &str, name: &str) -> Result<TaskWithNodes, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Task name is required".to_string()));
        }

        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };
        let node = TaskNode {
            id: Uuid::new_v4().to_string(),
            task_id: task.id.clone(),
            description: DEFAULT_NODE_DESCRIPTION.to_string(),
            is_completed: false,
            completed_at: None,
            note: None,
            order: 0,
            created_at: now,
            updated_at: now,
        };

        let mut tx = self.db.begin().await?;

        sqlx::query(
            "INSERT INTO tasks (id, user_id, name, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&task.id)
        .bind(&task.user_id)
        .bind(&task.name)
        .bind(task.created_at)
        .bind(task.updated_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"INSERT INTO task_nodes (id, task_id, description, is_completed, completed_at, note, "order", created_at, updated_at)
               VALUES (?, ?, ?, 0, NULL, NULL, 0, ?, ?)"#,
        )
        .bind(&node.id)
        .bind(&node.task_id)
        .bind(&node.description)
        .bind(node.created_at)
        .bind(node.updated_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        info!("created task {} for user {}", task.id, user_id);

        Ok(TaskWithNodes {
            id: task.id,
            name: task.name,
            created_at: task.created_at,
            nodes: vec![node],
        })
    }

    /// Caller's tasks newest-first, nodes ascending by order.
    pub async fn list_tasks(&self, user_id: &str) -> Result<Vec<TaskWithNodes>, AppError> {
        let tasks = repository::fetch_tasks(&self.db, user_id).await?;
        let nodes = repository::fetch_nodes_for_user(&self.db, user_id).await?;

        let mut nodes_by_task: HashMap<String, Vec<TaskNode>> = HashMap::new();
        for node in nodes {
            nodes_by_task.entry(node.task_id.clone()).or_default().push(node);
        }

        Ok(tasks
            .into_iter()
            .map(|task| {
                let nodes = nodes_by_task.remove(&task.id).unwrap_or_default();
                TaskWithNodes {
                    id: task.id,
                    name: task.name,
                    created_at: task.created_at,
                    nodes,
                }
            })
            .collect())
    }

    /// Apply a partial patch to a node. Marking a node complete requires a
    /// timestamp; marking it incomplete clears the one it had.
    pub async fn update_node(
        &self,
        user_id: &str,
        patch: UpdateNodeRequest,
    ) -> Result<(), AppError> {
        if patch.is_completed == Some(true) && patch.completed_at.is_none() {
            return Err(AppError::Validation(
                "completedAt is required when completing a node".to_string(),
            ));
        }

        let mut node = access::require_node_owner(&self.db, &patch.node_id, user_id).await?;

        if let Some(description) = patch.description {
            node.description = description;
        }
        if let Some(note) = patch.note {
            node.note = Some(note);
        }
        if let Some(is_completed) = patch.is_completed {
            node.is_completed = is_completed;
            node.completed_at = if is_completed { patch.completed_at } else { None };
        }
        node.updated_at = Utc::now();

        sqlx::query(
            "UPDATE task_nodes SET description = ?, note = ?, is_completed = ?, completed_at = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&node.description)
        .bind(&node.note)
        .bind(node.is_completed)
        .bind(node.completed_at)
        .bind(node.updated_at)
        .bind(&node.id)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    /// Remove a node unless it is the task's last one. Remaining orders are
    /// left as-is; gaps are fine.
    pub async fn delete_node(&self, user_id: &str, node_id: &str) -> Result<(), AppError> {
        let node = access::require_node_owner(&self.db, node_id, user_id).await?;

        let mut tx = self.db.begin().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM task_nodes WHERE task_id = ?")
            .bind(&node.task_id)
            .fetch_one(&mut *tx)
            .await?;

        if count <= 1 {
            return Err(AppError::Validation(
                "Task must have at least one node".to_string(),
            ));
        }

        sqlx::query("DELETE FROM task_nodes WHERE id = ?")
            .bind(node_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    pub async fn insert_node_after(
        &self,
        user_id: &str,
        task_id: &str,
        after_node_id: &str,
    ) -> Result<TaskNode, AppError> {
        access::require_task_owner(&self.db, task_id, user_id).await?;

        let mut tx = self.db.begin().await?;
        let node = ordering::insert_after(&mut tx, task_id, after_node_id).await?;
        tx.commit().await?;

        Ok(node)
    }

    /// Complete every incomplete node in one statement so they all share a
    /// single timestamp; nodes completed earlier keep theirs.
    pub async fn complete_task(&self, user_id: &str, task_id: &str) -> Result<(), AppError> {
        access::require_task_owner(&self.db, task_id, user_id).await?;

        let now = Utc::now();
        let completed = sqlx::query(
            "UPDATE task_nodes SET is_completed = 1, completed_at = ?, updated_at = ? \
             WHERE task_id = ? AND is_completed = 0",
        )
        .bind(now)
        .bind(now)
        .bind(task_id)
        .execute(&self.db)
        .await?
        .rows_affected();

        info!("completed task {} ({} nodes newly completed)", task_id, completed);

        Ok(())
    }
}
