/// Entity models for Taskboard
///
/// Entities are plain data values: the store layer alone holds the
/// database handle, and nothing here carries back-references.
///
/// # Models
///
/// - `task`: a unit of work owned by a user
/// - `user`: an account that can own tasks

pub mod task;
pub mod user;
