use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Space::Table)
                    .if_not_exists()
                    .col(pk_auto(Space::Id))
                    .col(integer(Space::OwnerId))
                    .col(string(Space::Name))
                    .col(string(Space::Address))
                    .col(integer(Space::Capacity))
                    .col(text_null(Space::Description))
                    .col(
                        timestamp_with_time_zone(Space::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Space::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_space_owner_id")
                            .from(Space::Table, Space::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Space::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Space {
    Table,
    Id,
    OwnerId,
    Name,
    Address,
    Capacity,
    Description,
    CreatedAt,
    UpdatedAt,
}
