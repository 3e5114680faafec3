/// User store
///
/// Persistence operations for users. The service only creates and reads
/// users, so the contract is deliberately narrower than the task store's.

use crate::models::user::{NewUser, User};
use crate::store::{StoreError, StoreResult};
use async_trait::async_trait;
use sqlx::PgPool;

/// Persistence contract for users
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a user and returns the generated identifier
    async fn create(&self, user: NewUser) -> StoreResult<i64>;

    /// Returns the user with the given identifier
    ///
    /// Fails with [`StoreError::NotFound`] when no row matches.
    async fn get_by_id(&self, id: i64) -> StoreResult<User>;
}

/// PostgreSQL-backed user store
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Creates a user store over the given pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, user: NewUser) -> StoreResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(user.name)
        .bind(user.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or(StoreError::NotFound)
    }
}
