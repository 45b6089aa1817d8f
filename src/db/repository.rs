use sqlx::SqlitePool;

use crate::models::{Task, TaskNode, User};

pub async fn insert_user(db: &SqlitePool, user: &User) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (id, email, name, password_hash, email_verified, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&user.id)
    .bind(&user.email)
    .bind(&user.name)
    .bind(&user.password_hash)
    .bind(user.email_verified)
    .bind(user.created_at)
    .bind(user.updated_at)
    .execute(db)
    .await?;

    Ok(())
}

pub async fn find_user_by_email(db: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, email, name, password_hash, email_verified, created_at, updated_at \
         FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(db)
    .await
}

pub async fn find_task(db: &SqlitePool, id: &str) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "SELECT id, user_id, name, created_at, updated_at FROM tasks WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn fetch_tasks(db: &SqlitePool, user_id: &str) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "SELECT id, user_id, name, created_at, updated_at \
         FROM tasks WHERE user_id = ? ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn find_node(db: &SqlitePool, id: &str) -> Result<Option<TaskNode>, sqlx::Error> {
    sqlx::query_as::<_, TaskNode>(
        r#"SELECT id, task_id, description, is_completed, completed_at, note, "order", created_at, updated_at
           FROM task_nodes WHERE id = ?"#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn fetch_nodes(db: &SqlitePool, task_id: &str) -> Result<Vec<TaskNode>, sqlx::Error> {
    sqlx::query_as::<_, TaskNode>(
        r#"SELECT id, task_id, description, is_completed, completed_at, note, "order", created_at, updated_at
           FROM task_nodes WHERE task_id = ? ORDER BY "order" ASC"#,
    )
    .bind(task_id)
    .fetch_all(db)
    .await
}

pub async fn fetch_nodes_for_user(
    db: &SqlitePool,
    user_id: &str,
) -> Result<Vec<TaskNode>, sqlx::Error> {
    sqlx::query_as::<_, TaskNode>(
        r#"SELECT n.id, n.task_id, n.description, n.is_completed, n.completed_at, n.note, n."order", n.created_at, n.updated_at
           FROM task_nodes n
           JOIN tasks t ON t.id = n.task_id
           WHERE t.user_id = ?
           ORDER BY n.task_id, n."order" ASC"#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}
