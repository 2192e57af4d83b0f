use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{QueryOrder, Select};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Upper bound of the `title` column, in characters
pub const TITLE_MAX_LEN: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "collections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, indexed)]
    pub uuid: Uuid,
    pub created_date: TimeDateTimeWithTimeZone,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(indexed)]
    pub created_by_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedById",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CreatedBy,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatedBy.def()
    }
}

impl Entity {
    /// Default enumeration: newest first, insertion order breaking ties
    pub fn find_ordered() -> Select<Entity> {
        Self::find()
            .order_by_desc(Column::CreatedDate)
            .order_by_desc(Column::Id)
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Fills the auto columns on insert and keeps them write-once afterwards
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            if self.uuid.is_not_set() {
                self.uuid = Set(Uuid::new_v4());
            }
            self.created_date = Set(OffsetDateTime::now_utc());
        } else {
            self.uuid = NotSet;
            self.created_date = NotSet;
        }

        Ok(self)
    }
}
