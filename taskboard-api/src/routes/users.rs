/// User endpoints
///
/// Users are created and read only; there is no update or delete surface.
///
/// # Endpoints
///
/// - `POST /user` - Create user
/// - `GET /user/:id` - Get user by id

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
use taskboard_shared::models::user::{NewUser, User};
use validator::Validate;

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,

    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Create user
///
/// # Endpoint
///
/// ```text
/// POST /user
/// Content-Type: application/json
///
/// { "name": "Ada", "email": "ada@example.com" }
/// ```
///
/// Responds `201 Created` with the generated identifier as the body.
///
/// # Errors
///
/// - `400 Bad Request`: malformed body
/// - `422 Unprocessable Entity`: validation failed
/// - `500 Internal Server Error`: storage failure
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<i64>)> {
    req.validate().map_err(ApiError::from_validation)?;

    let id = state
        .users
        .create(NewUser {
            name: req.name,
            email: req.email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(id)))
}

/// Get user by id
///
/// Responds `200 OK` with the user, `400` for a non-integer id, or `404`
/// when no user matches.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<User>> {
    let user = state.users.get_by_id(id).await?;

    Ok(Json(user))
}
