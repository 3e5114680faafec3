/// Task store
///
/// Persistence operations for tasks. Tasks support the full CRUD surface:
/// create, list, point lookup, update of description/status, and delete.
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::task::NewTask;
/// use taskboard_shared::store::{PgTaskStore, TaskStore};
///
/// # async fn example(pool: sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// let store = PgTaskStore::new(pool);
///
/// let id = store
///     .create(NewTask {
///         description: "write report".to_string(),
///         status: false,
///         user_id: 1,
///     })
///     .await?;
///
/// let task = store.get_by_id(id).await?;
/// assert_eq!(task.description, "write report");
/// # Ok(())
/// # }
/// ```

use crate::models::task::{NewTask, Task, TaskChanges};
use crate::store::{StoreError, StoreResult};
use async_trait::async_trait;
use sqlx::PgPool;

/// Persistence contract for tasks
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Inserts a task and returns the generated identifier
    async fn create(&self, task: NewTask) -> StoreResult<i64>;

    /// Returns all tasks in storage order
    async fn get_all(&self) -> StoreResult<Vec<Task>>;

    /// Returns the task with the given identifier
    ///
    /// Fails with [`StoreError::NotFound`] when no row matches.
    async fn get_by_id(&self, id: i64) -> StoreResult<Task>;

    /// Overwrites a task's description and status
    ///
    /// The identifier is immutable. Fails with [`StoreError::NotFound`]
    /// when the update affects zero rows.
    async fn update(&self, id: i64, changes: TaskChanges) -> StoreResult<()>;

    /// Deletes the task with the given identifier
    ///
    /// Fails with [`StoreError::NotFound`] when the delete affects zero
    /// rows.
    async fn delete(&self, id: i64) -> StoreResult<()>;
}

/// PostgreSQL-backed task store
#[derive(Debug, Clone)]
pub struct PgTaskStore {
    pool: PgPool,
}

impl PgTaskStore {
    /// Creates a task store over the given pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn create(&self, task: NewTask) -> StoreResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO tasks (description, status, user_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(task.description)
        .bind(task.status)
        .bind(task.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get_all(&self) -> StoreResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, description, status, user_id
            FROM tasks
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Task> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, description, status, user_id
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        task.ok_or(StoreError::NotFound)
    }

    async fn update(&self, id: i64, changes: TaskChanges) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET description = $1, status = $2
            WHERE id = $3
            "#,
        )
        .bind(changes.description)
        .bind(changes.status)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
