use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QuerySelect,
};
use uuid::Uuid;

use crate::entity::collection::{
    self, ActiveModel, Column, Entity as CollectionEntity, TITLE_MAX_LEN,
};
use crate::entity::user::Entity as UserEntity;
use crate::error::{StoreError, StoreResult};
use crate::models::{Collection, CollectionDraft, CreateCollection, UpdateCollection};
use crate::repositories::Repository;

/// Collection repository for database operations
pub struct CollectionRepository;

#[async_trait]
impl Repository<Collection> for CollectionRepository {
    type Id = Uuid;

    async fn find_by_id<C>(db: &C, id: Uuid) -> StoreResult<Collection>
    where
        C: ConnectionTrait,
    {
        let model = CollectionEntity::find()
            .filter(Column::Uuid.eq(id))
            .one(db)
            .await?
            .ok_or_else(|| StoreError::NotFound("Collection".to_string()))?;

        Ok(model.into())
    }

    async fn delete<C>(db: &C, id: Uuid) -> StoreResult<()>
    where
        C: ConnectionTrait,
    {
        let result = CollectionEntity::delete_many()
            .filter(Column::Uuid.eq(id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound("Collection".to_string()));
        }

        tracing::debug!(uuid = %id, "Collection deleted");
        Ok(())
    }

    async fn list<C>(db: &C, limit: u64, offset: u64) -> StoreResult<Vec<Collection>>
    where
        C: ConnectionTrait,
    {
        let models = CollectionEntity::find_ordered()
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
        let count = CollectionEntity::find().count(db).await?;
        Ok(count)
    }
}

impl CollectionRepository {
    /// Insert the draft when it has no id yet, otherwise update its row in place.
    ///
    /// Only title and description are written on update.
    pub async fn save<C>(db: &C, draft: &CollectionDraft) -> StoreResult<Collection>
    where
        C: ConnectionTrait,
    {
        check_title_bound(&draft.title)?;

        let model = match draft.id {
            None => {
                let model = ActiveModel {
                    id: NotSet,
                    uuid: draft.uuid.map_or(NotSet, Set),
                    created_date: NotSet,
                    title: Set(draft.title.clone()),
                    description: Set(draft.description.clone()),
                    created_by_id: draft.created_by.map_or(NotSet, Set),
                };

                let model = model.insert(db).await?;
                tracing::debug!(uuid = %model.uuid, owner = model.created_by_id, "Collection created");
                model
            }
            Some(id) => {
                let model = ActiveModel {
                    id: Unchanged(id),
                    uuid: NotSet,
                    created_date: NotSet,
                    title: Set(draft.title.clone()),
                    description: Set(draft.description.clone()),
                    created_by_id: NotSet,
                };

                let model = model.update(db).await.map_err(|e| match e {
                    DbErr::RecordNotUpdated => StoreError::NotFound("Collection".to_string()),
                    e => e.into(),
                })?;
                tracing::debug!(uuid = %model.uuid, "Collection updated");
                model
            }
        };

        Ok(model.into())
    }

    /// Create a new collection owned by `owner_id`
    pub async fn create<C>(
        db: &C,
        owner_id: i32,
        input: &CreateCollection,
    ) -> StoreResult<Collection>
    where
        C: ConnectionTrait,
    {
        let draft = CollectionDraft::new(input.title.clone(), input.description.clone(), owner_id);
        Self::save(db, &draft).await
    }

    /// Find collection by its public identifier
    pub async fn find_by_uuid<C>(db: &C, uuid: Uuid) -> StoreResult<Collection>
    where
        C: ConnectionTrait,
    {
        <Self as Repository<Collection>>::find_by_id(db, uuid).await
    }

    /// Update title and/or description of an existing collection
    pub async fn update<C>(db: &C, uuid: Uuid, input: &UpdateCollection) -> StoreResult<Collection>
    where
        C: ConnectionTrait,
    {
        let mut draft: CollectionDraft = Self::find_by_uuid(db, uuid).await?.into();
        input.apply(&mut draft);

        Self::save(db, &draft).await
    }

    /// Every collection in default order
    pub async fn list_all<C>(db: &C) -> StoreResult<Vec<Collection>>
    where
        C: ConnectionTrait,
    {
        let models = CollectionEntity::find_ordered().all(db).await?;
        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    /// Collections owned by a user, in default order
    pub async fn list_by_owner<C>(db: &C, owner_id: i32) -> StoreResult<Vec<Collection>>
    where
        C: ConnectionTrait,
    {
        Self::verify_owner_exists(db, owner_id).await?;

        let models = CollectionEntity::find_ordered()
            .filter(Column::CreatedById.eq(owner_id))
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    /// Count collections owned by a user
    pub async fn count_by_owner<C>(db: &C, owner_id: i32) -> StoreResult<u64>
    where
        C: ConnectionTrait,
    {
        Self::verify_owner_exists(db, owner_id).await?;

        let count = CollectionEntity::find()
            .filter(Column::CreatedById.eq(owner_id))
            .count(db)
            .await?;

        Ok(count)
    }

    async fn verify_owner_exists<C>(db: &C, owner_id: i32) -> StoreResult<()>
    where
        C: ConnectionTrait,
    {
        UserEntity::find_by_id(owner_id)
            .one(db)
            .await?
            .ok_or_else(|| StoreError::NotFound("User".to_string()))?;

        Ok(())
    }
}

/// Same bound the `title` column declares, applied before any backend sees it
fn check_title_bound(title: &str) -> StoreResult<()> {
    let len = title.chars().count();
    if len > TITLE_MAX_LEN {
        return Err(StoreError::Validation(format!(
            "title has {} characters, at most {} allowed",
            len, TITLE_MAX_LEN
        )));
    }
    Ok(())
}

// Conversion from SeaORM model to our domain model
impl From<collection::Model> for Collection {
    fn from(m: collection::Model) -> Self {
        Self {
            id: m.id,
            uuid: m.uuid,
            created_date: m.created_date,
            title: m.title,
            description: m.description,
            created_by: m.created_by_id,
        }
    }
}
