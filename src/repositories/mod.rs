pub mod collection;
pub mod user;

pub use collection::CollectionRepository;
pub use user::UserRepository;

use async_trait::async_trait;
use sea_orm::ConnectionTrait;

use crate::error::StoreResult;

/// Base repository trait for common CRUD operations.
///
/// Every method is generic over the connection so it can run on the pool or
/// inside a caller's transaction.
#[async_trait]
pub trait Repository<T>
where
    T: Send + Sync,
{
    /// Key the entity is addressed by
    type Id: Send + Sync;

    /// Find entity by ID
    async fn find_by_id<C>(db: &C, id: Self::Id) -> StoreResult<T>
    where
        C: ConnectionTrait;

    /// Delete entity by ID
    async fn delete<C>(db: &C, id: Self::Id) -> StoreResult<()>
    where
        C: ConnectionTrait;

    /// List entities in default order with pagination
    async fn list<C>(db: &C, limit: u64, offset: u64) -> StoreResult<Vec<T>>
    where
        C: ConnectionTrait;

    /// Count total entities
    async fn count<C>(db: &C) -> StoreResult<u64>
    where
        C: ConnectionTrait;
}
