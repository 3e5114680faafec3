/// User service
///
/// Thin passthrough to the user store. No additional validation happens
/// here; request-shape checks live in the handlers.

use std::sync::Arc;
use taskboard_shared::models::user::{NewUser, User};
use taskboard_shared::store::{StoreResult, UserStore};

/// Business operations for users
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    /// Creates a user service over the given store
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Creates a user, returning the generated identifier
    pub async fn create(&self, user: NewUser) -> StoreResult<i64> {
        self.store.create(user).await
    }

    /// Returns the user with the given identifier
    pub async fn get_by_id(&self, id: i64) -> StoreResult<User> {
        self.store.get_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use taskboard_shared::store::StoreError;

    struct SingleUserStore;

    #[async_trait]
    impl UserStore for SingleUserStore {
        async fn create(&self, _user: NewUser) -> StoreResult<i64> {
            Ok(1)
        }

        async fn get_by_id(&self, id: i64) -> StoreResult<User> {
            if id == 1 {
                Ok(User {
                    id: 1,
                    name: "Ada".to_string(),
                    email: "ada@example.com".to_string(),
                })
            } else {
                Err(StoreError::NotFound)
            }
        }
    }

    #[tokio::test]
    async fn test_create_delegates_to_store() {
        let service = UserService::new(Arc::new(SingleUserStore));

        let id = service
            .create(NewUser {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(id, 1);
    }

    #[tokio::test]
    async fn test_get_by_id_propagates_not_found() {
        let service = UserService::new(Arc::new(SingleUserStore));

        let err = service.get_by_id(99).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
