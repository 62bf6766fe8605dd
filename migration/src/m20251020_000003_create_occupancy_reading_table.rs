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
                    .table(OccupancyReading::Table)
                    .if_not_exists()
                    .col(pk_auto(OccupancyReading::Id))
                    .col(integer(OccupancyReading::SpaceId))
                    .col(integer(OccupancyReading::Count))
                    .col(string_null(OccupancyReading::Source))
                    .col(
                        timestamp_with_time_zone(OccupancyReading::RecordedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_occupancy_reading_space_id")
                            .from(OccupancyReading::Table, OccupancyReading::SpaceId)
                            .to(Space::Table, Space::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // History is always read per space, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_occupancy_reading_space_recorded")
                    .table(OccupancyReading::Table)
                    .col(OccupancyReading::SpaceId)
                    .col(OccupancyReading::RecordedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OccupancyReading::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OccupancyReading {
    Table,
    Id,
    SpaceId,
    Count,
    Source,
    RecordedAt,
}
