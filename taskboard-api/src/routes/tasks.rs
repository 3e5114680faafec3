/// Task endpoints
///
/// CRUD surface for tasks. Creation validates that the referenced user
/// exists (via the task service) before inserting.
///
/// # Endpoints
///
/// - `POST /task` - Create task
/// - `GET /task` - List tasks
/// - `GET /task/:id` - Get task by id
/// - `PUT /task/:id` - Update description and status
/// - `DELETE /task/:id` - Delete task

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use taskboard_shared::models::task::{NewTask, Task, TaskChanges};
use validator::Validate;

/// Create task request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task description
    #[validate(length(min = 1, max = 150, message = "Description must be 1-150 characters"))]
    pub desc: String,

    /// Completion status (defaults to false)
    #[serde(default)]
    pub status: bool,

    /// Identifier of the owning user
    pub user_id: i64,
}

/// Update task request
///
/// An update overwrites both fields; the identifier comes from the path
/// and the owning user is immutable.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    /// New description
    #[validate(length(min = 1, max = 150, message = "Description must be 1-150 characters"))]
    pub desc: String,

    /// New completion status
    #[serde(default)]
    pub status: bool,
}

/// Create task
///
/// # Endpoint
///
/// ```text
/// POST /task
/// Content-Type: application/json
///
/// { "desc": "write report", "status": false, "user_id": 2 }
/// ```
///
/// Responds `201 Created` with the generated identifier as the body.
///
/// # Errors
///
/// - `400 Bad Request`: malformed body, or the referenced user does not exist
/// - `422 Unprocessable Entity`: validation failed
/// - `500 Internal Server Error`: storage failure
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<i64>)> {
    req.validate().map_err(ApiError::from_validation)?;

    let user_id = req.user_id;
    let id = state
        .tasks
        .create(NewTask {
            description: req.desc,
            status: req.status,
            user_id,
        })
        .await
        .map_err(|err| {
            // The only lookup on this path is the owner check, so a
            // not-found here is a client error, not a missing task.
            if err.is_not_found() {
                ApiError::BadRequest(format!("user {} does not exist", user_id))
            } else {
                ApiError::from(err)
            }
        })?;

    Ok((StatusCode::CREATED, Json(id)))
}

/// List all tasks
///
/// Responds `200 OK` with a JSON array in storage order, or `500` on a
/// storage failure.
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.tasks.get_all().await?;

    Ok(Json(tasks))
}

/// Get task by id
///
/// Responds `200 OK` with the task, `400` for a non-integer id, or `404`
/// when no task matches.
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Task>> {
    let task = state.tasks.get_by_id(id).await?;

    Ok(Json(task))
}

/// Update task
///
/// # Endpoint
///
/// ```text
/// PUT /task/:id
/// Content-Type: application/json
///
/// { "desc": "write report", "status": true }
/// ```
///
/// Responds `204 No Content` on success.
///
/// # Errors
///
/// - `400 Bad Request`: malformed body or non-integer id
/// - `404 Not Found`: the update affected zero rows
/// - `422 Unprocessable Entity`: validation failed
/// - `500 Internal Server Error`: storage failure
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<StatusCode> {
    req.validate().map_err(ApiError::from_validation)?;

    state
        .tasks
        .update(
            id,
            TaskChanges {
                description: req.desc,
                status: req.status,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete task
///
/// Responds `204 No Content` on success, `400` for a non-integer id,
/// `404` when the delete affected zero rows, or `500` on a storage
/// failure.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.tasks.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
