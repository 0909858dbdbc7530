use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::cancellation::Cancellation;
use crate::error::StorageResult;
use crate::models::User;

/// Repository trait for User persistence.
///
/// Every call takes a [`Cancellation`]; implementations stop and return
/// [`StorageError::Cancelled`](crate::error::StorageError::Cancelled) once it
/// fires.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every stored user
    async fn get_all(&self, cancel: &Cancellation) -> StorageResult<Vec<User>>;

    /// Get a user by ID
    async fn get_by_id(&self, id: Uuid, cancel: &Cancellation) -> StorageResult<Option<User>>;

    /// Check whether a user with exactly this full name exists
    async fn name_exists(&self, full_name: &str, cancel: &Cancellation) -> StorageResult<bool>;

    /// Persist a new user, reporting whether a row was written
    async fn create(&self, user: User, cancel: &Cancellation) -> StorageResult<bool>;

    /// Remove a user, reporting whether a row was removed
    async fn delete(&self, user: User, cancel: &Cancellation) -> StorageResult<bool>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_all(&self, cancel: &Cancellation) -> StorageResult<Vec<User>> {
        cancel
            .run(async {
                let users = self.users.read().await;
                let mut all: Vec<User> = users.values().cloned().collect();
                all.sort_by(|a, b| a.full_name.cmp(&b.full_name).then(a.id.cmp(&b.id)));
                Ok(all)
            })
            .await
    }

    async fn get_by_id(&self, id: Uuid, cancel: &Cancellation) -> StorageResult<Option<User>> {
        cancel
            .run(async { Ok(self.users.read().await.get(&id).cloned()) })
            .await
    }

    async fn name_exists(&self, full_name: &str, cancel: &Cancellation) -> StorageResult<bool> {
        cancel
            .run(async {
                let users = self.users.read().await;
                Ok(users.values().any(|u| u.full_name == full_name))
            })
            .await
    }

    async fn create(&self, user: User, cancel: &Cancellation) -> StorageResult<bool> {
        cancel
            .run(async {
                let mut users = self.users.write().await;

                if users.contains_key(&user.id) {
                    return Ok(false);
                }

                tracing::debug!(user_id = %user.id, "Stored user");
                users.insert(user.id, user);
                Ok(true)
            })
            .await
    }

    async fn delete(&self, user: User, cancel: &Cancellation) -> StorageResult<bool> {
        cancel
            .run(async {
                let removed = self.users.write().await.remove(&user.id).is_some();
                if removed {
                    tracing::debug!(user_id = %user.id, "Removed user");
                }
                Ok(removed)
            })
            .await
    }
}
