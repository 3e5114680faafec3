/// Task service
///
/// Passthrough to the task store for CRUD, plus the one validation step
/// this system carries: before creating a task, the referenced user is
/// looked up through the user service. The check runs in application code
/// rather than as a database constraint, so the schema stays decoupled
/// from the rule.

use crate::services::user::UserService;
use std::sync::Arc;
use taskboard_shared::models::task::{NewTask, Task, TaskChanges};
use taskboard_shared::store::{StoreResult, TaskStore};

/// Business operations for tasks
pub struct TaskService {
    store: Arc<dyn TaskStore>,
    users: Arc<UserService>,
}

impl TaskService {
    /// Creates a task service over the given store and user service
    pub fn new(store: Arc<dyn TaskStore>, users: Arc<UserService>) -> Self {
        Self { store, users }
    }

    /// Creates a task, returning the generated identifier
    ///
    /// The owning user is resolved first; if that lookup fails the insert
    /// is never attempted and the lookup's error is returned unchanged.
    pub async fn create(&self, task: NewTask) -> StoreResult<i64> {
        self.users.get_by_id(task.user_id).await?;

        self.store.create(task).await
    }

    /// Returns all tasks in storage order
    pub async fn get_all(&self) -> StoreResult<Vec<Task>> {
        self.store.get_all().await
    }

    /// Returns the task with the given identifier
    pub async fn get_by_id(&self, id: i64) -> StoreResult<Task> {
        self.store.get_by_id(id).await
    }

    /// Overwrites a task's description and status
    pub async fn update(&self, id: i64, changes: TaskChanges) -> StoreResult<()> {
        self.store.update(id, changes).await
    }

    /// Deletes the task with the given identifier
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        self.store.delete(id).await
    }
}
