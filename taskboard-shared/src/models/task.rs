/// Task model
///
/// A task is a unit of work owned by a user. The owning user must exist
/// when the task is created; the task service enforces this in application
/// code rather than through a database constraint.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id BIGSERIAL PRIMARY KEY,
///     description VARCHAR(150) NOT NULL,
///     status BOOLEAN NOT NULL DEFAULT FALSE,
///     user_id BIGINT NOT NULL
/// );
/// ```
///
/// # JSON
///
/// The wire format uses `desc` for the description field:
///
/// ```json
/// { "id": 1, "desc": "write report", "status": false, "user_id": 2 }
/// ```

use serde::{Deserialize, Serialize};

/// A persisted task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Storage-generated identifier
    pub id: i64,

    /// What the task is about (`desc` on the wire)
    #[serde(rename = "desc")]
    pub description: String,

    /// Whether the task is done
    pub status: bool,

    /// Identifier of the owning user
    pub user_id: i64,
}

/// Input for creating a new task
///
/// The identifier is assigned by storage on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    /// What the task is about (`desc` on the wire)
    #[serde(rename = "desc")]
    pub description: String,

    /// Whether the task is done
    pub status: bool,

    /// Identifier of the owning user
    pub user_id: i64,
}

/// Fields an update overwrites
///
/// The identifier and owning user are immutable; an update always rewrites
/// both description and status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskChanges {
    /// New description (`desc` on the wire)
    #[serde(rename = "desc")]
    pub description: String,

    /// New completion status
    pub status: bool,
}
