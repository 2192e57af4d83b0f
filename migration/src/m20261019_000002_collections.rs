use sea_orm_migration::prelude::*;

use crate::m20261019_000001_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Collections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Collections::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Collections::Uuid).uuid().not_null())
                    .col(
                        ColumnDef::new(Collections::CreatedDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Collections::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Collections::Description).text().not_null())
                    .col(ColumnDef::new(Collections::CreatedById).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collections_created_by_id")
                            .from(Collections::Table, Collections::CreatedById)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_collections_uuid")
                    .table(Collections::Table)
                    .col(Collections::Uuid)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Owner lookups and the cascade both scan by owner.
        manager
            .create_index(
                Index::create()
                    .name("idx_collections_created_by_id")
                    .table(Collections::Table)
                    .col(Collections::CreatedById)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Collections::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Collections {
    Table,
    Id,
    Uuid,
    CreatedDate,
    Title,
    Description,
    CreatedById,
}
