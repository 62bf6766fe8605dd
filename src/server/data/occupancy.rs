//! Occupancy data repository.
//!
//! Provides `OccupancyRepository` for the append-only reading log and the
//! versioned current occupancy row. The repository performs single
//! statements only; the retry loop and per-space locking live in the
//! occupancy service.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::occupancy::{OccupancyReading, OccupancySnapshot};

/// Version assigned to a current occupancy row when it is first inserted.
pub const INITIAL_VERSION: i32 = 1;

pub struct OccupancyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OccupancyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a raw reading to the log. Readings are never updated.
    ///
    /// # Arguments
    /// - `space_id` - Space the reading belongs to
    /// - `count` - Raw reported head count, stored unclamped
    /// - `source` - Optional origin tag
    /// - `recorded_at` - Time the reading was received
    ///
    /// # Returns
    /// - `Ok(OccupancyReading)` - The stored reading
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_reading(
        &self,
        space_id: i32,
        count: i32,
        source: Option<String>,
        recorded_at: DateTime<Utc>,
    ) -> Result<OccupancyReading, DbErr> {
        let entity = entity::occupancy_reading::ActiveModel {
            space_id: ActiveValue::Set(space_id),
            count: ActiveValue::Set(count),
            source: ActiveValue::Set(source),
            recorded_at: ActiveValue::Set(recorded_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(OccupancyReading::from_entity(entity))
    }

    /// Gets the readings of a space with pagination, newest first.
    ///
    /// # Returns
    /// - `Ok((readings, total))` - Readings for the requested page and total count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_readings_paginated(
        &self,
        space_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<OccupancyReading>, u64), DbErr> {
        let paginator = entity::prelude::OccupancyReading::find()
            .filter(entity::occupancy_reading::Column::SpaceId.eq(space_id))
            .order_by_desc(entity::occupancy_reading::Column::RecordedAt)
            .order_by_desc(entity::occupancy_reading::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let readings = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(OccupancyReading::from_entity)
            .collect();

        Ok((readings, total))
    }

    /// Fetches the current occupancy row of a space, if any reading was accepted.
    pub async fn find_current(
        &self,
        space_id: i32,
    ) -> Result<Option<entity::current_occupancy::Model>, DbErr> {
        entity::prelude::CurrentOccupancy::find_by_id(space_id)
            .one(self.db)
            .await
    }

    /// Inserts the first current occupancy row of a space at `INITIAL_VERSION`.
    ///
    /// A concurrent writer inserting first makes this fail with a unique
    /// constraint violation on the primary key.
    pub async fn insert_current(
        &self,
        space_id: i32,
        snapshot: &OccupancySnapshot,
    ) -> Result<entity::current_occupancy::Model, DbErr> {
        entity::current_occupancy::ActiveModel {
            space_id: ActiveValue::Set(space_id),
            count: ActiveValue::Set(snapshot.count),
            percentage: ActiveValue::Set(snapshot.percentage),
            crowd_level: ActiveValue::Set(snapshot.crowd_level.as_str().to_string()),
            version: ActiveValue::Set(INITIAL_VERSION),
            updated_at: ActiveValue::Set(snapshot.recorded_at),
        }
        .insert(self.db)
        .await
    }

    /// Replaces every derived field of the current row in one statement,
    /// provided the stored version still equals `expected_version`.
    ///
    /// # Returns
    /// - `Ok(true)` - Row replaced and version incremented
    /// - `Ok(false)` - Version moved on (or the row vanished); caller should retry
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_current(
        &self,
        space_id: i32,
        expected_version: i32,
        snapshot: &OccupancySnapshot,
    ) -> Result<bool, DbErr> {
        use entity::current_occupancy::Column;

        let result = entity::prelude::CurrentOccupancy::update_many()
            .col_expr(Column::Count, Expr::value(snapshot.count))
            .col_expr(Column::Percentage, Expr::value(snapshot.percentage))
            .col_expr(
                Column::CrowdLevel,
                Expr::value(snapshot.crowd_level.as_str()),
            )
            .col_expr(Column::Version, Expr::value(expected_version + 1))
            .col_expr(Column::UpdatedAt, Expr::value(snapshot.recorded_at))
            .filter(Column::SpaceId.eq(space_id))
            .filter(Column::Version.eq(expected_version))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Counts the readings logged for a space.
    pub async fn count_readings(&self, space_id: i32) -> Result<u64, DbErr> {
        entity::prelude::OccupancyReading::find()
            .filter(entity::occupancy_reading::Column::SpaceId.eq(space_id))
            .count(self.db)
            .await
    }
}
