use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000002_create_space_table::Space;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CurrentOccupancy::Table)
                    .if_not_exists()
                    .col(integer(CurrentOccupancy::SpaceId).primary_key())
                    .col(integer(CurrentOccupancy::Count))
                    .col(double(CurrentOccupancy::Percentage))
                    .col(string_len(CurrentOccupancy::CrowdLevel, 16))
                    .col(integer(CurrentOccupancy::Version).default(0))
                    .col(
                        timestamp_with_time_zone(CurrentOccupancy::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_current_occupancy_space_id")
                            .from(CurrentOccupancy::Table, CurrentOccupancy::SpaceId)
                            .to(Space::Table, Space::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CurrentOccupancy::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CurrentOccupancy {
    Table,
    SpaceId,
    Count,
    Percentage,
    CrowdLevel,
    Version,
    UpdatedAt,
}
