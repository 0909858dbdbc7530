use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    cancellation::Cancellation,
    entity,
    error::StorageResult,
    models::User,
    repository::UserRepository,
};

/// PostgreSQL implementation of UserRepository using SeaORM
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get_all(&self, cancel: &Cancellation) -> StorageResult<Vec<User>> {
        cancel
            .run(async {
                let models = entity::Entity::find()
                    .order_by_asc(entity::Column::FullName)
                    .order_by_asc(entity::Column::Id)
                    .all(&self.db)
                    .await?;

                Ok(models.into_iter().map(User::from).collect())
            })
            .await
    }

    async fn get_by_id(&self, id: Uuid, cancel: &Cancellation) -> StorageResult<Option<User>> {
        cancel
            .run(async {
                let model = entity::Entity::find_by_id(id).one(&self.db).await?;
                Ok(model.map(User::from))
            })
            .await
    }

    async fn name_exists(&self, full_name: &str, cancel: &Cancellation) -> StorageResult<bool> {
        cancel
            .run(async {
                let existing = entity::Entity::find()
                    .filter(entity::Column::FullName.eq(full_name))
                    .one(&self.db)
                    .await?;

                Ok(existing.is_some())
            })
            .await
    }

    /// Inserts the row and reports `true`.
    ///
    /// A rejected insert (duplicate key, lost connection) surfaces as
    /// `StorageError::Database`, never as `Ok(false)`.
    async fn create(&self, user: User, cancel: &Cancellation) -> StorageResult<bool> {
        cancel
            .run(async {
                let active_model: entity::ActiveModel = user.into();
                let model = active_model.insert(&self.db).await?;

                tracing::debug!(user_id = %model.id, "Inserted user row");
                Ok(true)
            })
            .await
    }

    async fn delete(&self, user: User, cancel: &Cancellation) -> StorageResult<bool> {
        cancel
            .run(async {
                let result = entity::Entity::delete_by_id(user.id).exec(&self.db).await?;

                if result.rows_affected > 0 {
                    tracing::debug!(user_id = %user.id, "Deleted user row");
                }
                Ok(result.rows_affected > 0)
            })
            .await
    }
}
