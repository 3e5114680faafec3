/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for driving the full router
/// without a live database:
/// - In-memory task and user stores
/// - A failing task store for storage-error paths
/// - Request/response helpers

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use taskboard_api::app::{build_router, AppState};
use taskboard_api::config::{ApiConfig, Config, DatabaseConfig};
use taskboard_shared::models::task::{NewTask, Task, TaskChanges};
use taskboard_shared::models::user::{NewUser, User};
use taskboard_shared::store::{StoreError, StoreResult, TaskStore, UserStore};
use tower::Service as _;

/// In-memory task store
///
/// Behaves like the PostgreSQL store: sequential identifiers, storage
/// order on list, and NotFound on zero-row updates and deletes.
#[derive(Default)]
pub struct InMemoryTaskStore {
    tasks: Mutex<HashMap<i64, Task>>,
    next_id: AtomicI64,
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create(&self, task: NewTask) -> StoreResult<i64> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.tasks.lock().unwrap().insert(
            id,
            Task {
                id,
                description: task.description,
                status: task.status,
                user_id: task.user_id,
            },
        );
        Ok(id)
    }

    async fn get_all(&self) -> StoreResult<Vec<Task>> {
        let mut tasks: Vec<Task> = self.tasks.lock().unwrap().values().cloned().collect();
        tasks.sort_by_key(|task| task.id);
        Ok(tasks)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Task> {
        self.tasks
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update(&self, id: i64, changes: TaskChanges) -> StoreResult<()> {
        match self.tasks.lock().unwrap().get_mut(&id) {
            Some(task) => {
                task.description = changes.description;
                task.status = changes.status;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        self.tasks
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

/// In-memory user store
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<i64, User>>,
    next_id: AtomicI64,
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, user: NewUser) -> StoreResult<i64> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.users.lock().unwrap().insert(
            id,
            User {
                id,
                name: user.name,
                email: user.email,
            },
        );
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<User> {
        self.users
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}

/// Task store where every operation fails with a database error
pub struct FailingTaskStore;

#[async_trait]
impl TaskStore for FailingTaskStore {
    async fn create(&self, _task: NewTask) -> StoreResult<i64> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn get_all(&self) -> StoreResult<Vec<Task>> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn get_by_id(&self, _id: i64) -> StoreResult<Task> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn update(&self, _id: i64, _changes: TaskChanges) -> StoreResult<()> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn delete(&self, _id: i64) -> StoreResult<()> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }
}

fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["*".to_string()],
        },
        database: DatabaseConfig {
            url: "postgresql://localhost/taskboard_test".to_string(),
            max_connections: 1,
        },
    }
}

fn build_test_router(task_store: Arc<dyn TaskStore>, user_store: Arc<dyn UserStore>) -> Router {
    // The pool is never used by the in-memory stores; connect lazily so
    // no database is required.
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgresql://localhost/taskboard_test")
        .unwrap();

    build_router(AppState::with_stores(
        pool,
        test_config(),
        task_store,
        user_store,
    ))
}

/// Builds a router over fresh in-memory stores
pub fn test_app() -> Router {
    build_test_router(
        Arc::new(InMemoryTaskStore::default()),
        Arc::new(InMemoryUserStore::default()),
    )
}

/// Builds a router whose task store fails every operation
pub fn failing_task_app() -> Router {
    build_test_router(
        Arc::new(FailingTaskStore),
        Arc::new(InMemoryUserStore::default()),
    )
}

/// Sends a request through the router
pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().call(request).await.unwrap()
}

/// Builds a request with a JSON body
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a request with no body
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Reads a response body as JSON
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Creates a user through the API and returns its identifier
pub async fn seed_user(app: &Router) -> i64 {
    let response = send(
        app,
        json_request(
            "POST",
            "/user",
            serde_json::json!({ "name": "Ada", "email": "ada@example.com" }),
        ),
    )
    .await;

    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await.as_i64().unwrap()
}

/// Creates a task through the API and returns its identifier
pub async fn seed_task(app: &Router, user_id: i64, desc: &str) -> i64 {
    let response = send(
        app,
        json_request(
            "POST",
            "/task",
            serde_json::json!({ "desc": desc, "status": false, "user_id": user_id }),
        ),
    )
    .await;

    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await.as_i64().unwrap()
}
