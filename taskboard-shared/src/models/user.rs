/// User model
///
/// Users own tasks via `tasks.user_id`. In this service users are only
/// created and read; there is no update or delete surface for them.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id BIGSERIAL PRIMARY KEY,
///     name VARCHAR(50) NOT NULL,
///     email VARCHAR(50) NOT NULL
/// );
/// ```

use serde::{Deserialize, Serialize};

/// A persisted user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Storage-generated identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}
