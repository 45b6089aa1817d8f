use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Description given to nodes created without one (the initial node of a
/// task and nodes inserted mid-sequence).
pub const DEFAULT_NODE_DESCRIPTION: &str = "New node";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TaskNode {
    pub id: String,
    pub task_id: String,
    pub description: String,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
    pub order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; absent fields are left untouched. Completion state and
/// timestamp travel together.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNodeRequest {
    pub node_id: String,
    pub description: Option<String>,
    pub note: Option<String>,
    pub is_completed: Option<bool>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertNodeRequest {
    pub task_id: String,
    pub after_node_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNodeParams {
    pub node_id: String,
}
