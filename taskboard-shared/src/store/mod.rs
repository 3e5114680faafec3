/// Store layer for Taskboard
///
/// A store issues direct persistence operations for one entity type.
/// Every operation is a single parameterized statement executed against
/// the pool supplied at construction: no transactions, no batching, no
/// retries.
///
/// Stores are defined as async traits so the service layer can be
/// exercised against in-memory doubles; `PgTaskStore` and `PgUserStore`
/// are the PostgreSQL implementations.

pub mod task;
pub mod user;

pub use task::{PgTaskStore, TaskStore};
pub use user::{PgUserStore, UserStore};

use thiserror::Error;

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the store layer
///
/// "Not found" is a distinct kind rather than a sentinel value: it is
/// signaled whenever a lookup finds no row, or an update or delete
/// affects zero rows.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested row does not exist
    #[error("row not found")]
    NotFound,

    /// Any other database failure, propagated unchanged
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl StoreError {
    /// Whether this error is the domain "not found" signal
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Database(other),
        }
    }
}
