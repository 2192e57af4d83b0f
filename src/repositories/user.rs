use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::entity::user::{self, ActiveModel, Column, Entity as UserEntity};
use crate::error::{StoreError, StoreResult};
use crate::models::{CreateUser, User};
use crate::repositories::Repository;

/// User repository for database operations
pub struct UserRepository;

// Implement the base Repository trait
#[async_trait]
impl Repository<User> for UserRepository {
    type Id = i32;

    async fn find_by_id<C>(db: &C, id: i32) -> StoreResult<User>
    where
        C: ConnectionTrait,
    {
        let model = UserEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| StoreError::NotFound("User".to_string()))?;

        Ok(model.into())
    }

    /// Deleting a user cascades to the collections it owns
    async fn delete<C>(db: &C, id: i32) -> StoreResult<()>
    where
        C: ConnectionTrait,
    {
        let result = UserEntity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound("User".to_string()));
        }

        tracing::debug!(user_id = id, "User deleted");
        Ok(())
    }

    async fn list<C>(db: &C, limit: u64, offset: u64) -> StoreResult<Vec<User>>
    where
        C: ConnectionTrait,
    {
        let models = UserEntity::find()
            .order_by_desc(Column::DateJoined)
            .order_by_desc(Column::Id)
            .offset(offset)
            .limit(limit)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn count<C>(db: &C) -> StoreResult<u64>
    where
        C: ConnectionTrait,
    {
        let count = UserEntity::find().count(db).await?;
        Ok(count)
    }
}

// User-specific methods (not in the base trait)
impl UserRepository {
    /// Create a new user
    pub async fn create<C>(db: &C, input: &CreateUser) -> StoreResult<User>
    where
        C: ConnectionTrait,
    {
        let model = ActiveModel {
            username: Set(input.username.clone()),
            email: Set(input.email.clone()),
            date_joined: Set(time::OffsetDateTime::now_utc()),
            ..Default::default()
        };

        let result = model.insert(db).await?;
        tracing::debug!(user_id = result.id, "User created");

        Ok(result.into())
    }

    /// Find user by username
    pub async fn find_by_username<C>(db: &C, username: &str) -> StoreResult<User>
    where
        C: ConnectionTrait,
    {
        let model = UserEntity::find()
            .filter(Column::Username.eq(username))
            .one(db)
            .await?
            .ok_or_else(|| StoreError::NotFound("User".to_string()))?;

        Ok(model.into())
    }
}

// Conversion from SeaORM model to our domain model
impl From<user::Model> for User {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            email: m.email,
            date_joined: m.date_joined,
        }
    }
}
