//! Occupancy service: accepts readings and maintains the current occupancy.
//!
//! A report runs in this order:
//!
//! 1. reject negative counts before anything is stored
//! 2. take the per-space lock from `SpaceLocks`
//! 3. look up the space (`NotFound` if missing)
//! 4. append the raw reading to the log
//! 5. compute the clamped percentage and crowd level (`BadRequest` if the
//!    space has no positive capacity; the reading stays logged)
//! 6. replace the current occupancy row with a versioned write, retrying a
//!    bounded number of times if another process moved the version on
//!
//! The in-process lock serialises writers inside one server; the version
//! column covers writers in other processes sharing the database.
//!
//! The stored percentage and crowd level depend on the space's capacity, so a
//! capacity change must be followed by `apply_capacity`, which rewrites the
//! current row from its raw count. Reads recompute both from the live
//! capacity as well.

pub mod lock;

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{occupancy::OccupancyRepository, space::SpaceRepository},
    error::AppError,
    model::{
        occupancy::{
            occupancy_percentage, CurrentOccupancy, OccupancyReading, OccupancySettings,
            OccupancySnapshot, ReportOccupancyParam,
        },
        pagination::Paginated,
        space::Space,
    },
    service::{occupancy::lock::SpaceLocks, space::space_not_found},
};

pub struct OccupancyService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a OccupancySettings,
    locks: &'a SpaceLocks,
}

impl<'a> OccupancyService<'a> {
    /// Creates a new OccupancyService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `settings` - Crowd level thresholds and retry bound
    /// - `locks` - Process-wide per-space lock table
    pub fn new(
        db: &'a DatabaseConnection,
        settings: &'a OccupancySettings,
        locks: &'a SpaceLocks,
    ) -> Self {
        Self {
            db,
            settings,
            locks,
        }
    }

    /// Records a reading and updates the space's current occupancy.
    ///
    /// Counts above capacity are stored raw; the percentage is clamped to
    /// 100 and the level is `FULL`.
    ///
    /// # Arguments
    /// - `param` - Space id, raw head count and optional source tag
    ///
    /// # Returns
    /// - `Ok(CurrentOccupancy)` - The occupancy written by this report
    /// - `Err(AppError::BadRequest)` - Negative count, or the space has no
    ///   positive capacity (the reading is still logged in that case)
    /// - `Err(AppError::NotFound)` - No space with that id
    /// - `Err(AppError::Conflict)` - The versioned write kept losing to other
    ///   writers until the retry bound was reached
    pub async fn report(&self, param: ReportOccupancyParam) -> Result<CurrentOccupancy, AppError> {
        if param.count < 0 {
            return Err(AppError::BadRequest(format!(
                "Occupancy count must not be negative, got {}",
                param.count
            )));
        }

        let _guard = self.locks.acquire(param.space_id).await;

        let space = self.find_space(param.space_id).await?;

        let recorded_at = Utc::now();
        OccupancyRepository::new(self.db)
            .insert_reading(space.id, param.count, param.source, recorded_at)
            .await?;

        let Some(snapshot) = self.snapshot(param.count, space.capacity, recorded_at) else {
            return Err(AppError::BadRequest(format!(
                "Space {} has capacity {}, occupancy cannot be computed",
                space.id, space.capacity
            )));
        };

        self.commit(space.id, &snapshot).await?;

        tracing::debug!(
            "Space {} occupancy is now {} ({:.1}%, {})",
            space.id,
            snapshot.count,
            snapshot.percentage,
            snapshot.crowd_level
        );

        Ok(CurrentOccupancy {
            space_id: space.id,
            capacity: space.capacity,
            count: snapshot.count,
            percentage: snapshot.percentage,
            crowd_level: snapshot.crowd_level,
            updated_at: Some(snapshot.recorded_at),
        })
    }

    /// Returns the current occupancy of a space.
    ///
    /// Percentage and crowd level are derived from the stored raw count and
    /// the space's current capacity.
    ///
    /// # Returns
    /// - `Ok(CurrentOccupancy)` - Latest accepted reading, or an `EMPTY`
    ///   occupancy with no timestamp if none was accepted yet
    /// - `Err(AppError::NotFound)` - No space with that id
    pub async fn current(&self, space_id: i32) -> Result<CurrentOccupancy, AppError> {
        let space = self.find_space(space_id).await?;

        match OccupancyRepository::new(self.db)
            .find_current(space.id)
            .await?
        {
            Some(row) => {
                let mut current = CurrentOccupancy::from_entity(row, space.capacity)?;
                if let Some(percentage) = occupancy_percentage(current.count, space.capacity) {
                    current.percentage = percentage;
                    current.crowd_level = self.settings.thresholds.classify(percentage);
                }

                Ok(current)
            }
            None => Ok(CurrentOccupancy::empty(space.id, space.capacity)),
        }
    }

    /// Rewrites the current occupancy row of a space for its present
    /// capacity, keeping the raw count and timestamp of the last reading.
    ///
    /// Call after the capacity of a space changed.
    ///
    /// # Returns
    /// - `Ok(Some(CurrentOccupancy))` - The rewritten occupancy
    /// - `Ok(None)` - The space has no readings yet, or no usable capacity
    /// - `Err(AppError::NotFound)` - No space with that id
    /// - `Err(AppError::Conflict)` - Concurrent writers kept moving the version
    pub async fn apply_capacity(
        &self,
        space_id: i32,
    ) -> Result<Option<CurrentOccupancy>, AppError> {
        let _guard = self.locks.acquire(space_id).await;

        let space = self.find_space(space_id).await?;
        let repo = OccupancyRepository::new(self.db);

        for _ in 0..self.settings.max_retries {
            let Some(row) = repo.find_current(space.id).await? else {
                return Ok(None);
            };
            let Some(snapshot) = self.snapshot(row.count, space.capacity, row.updated_at) else {
                return Ok(None);
            };

            if repo.update_current(space.id, row.version, &snapshot).await? {
                tracing::debug!(
                    "Recomputed occupancy of space {} for capacity {}: {:.1}%",
                    space.id,
                    space.capacity,
                    snapshot.percentage
                );

                return Ok(Some(CurrentOccupancy {
                    space_id: space.id,
                    capacity: space.capacity,
                    count: snapshot.count,
                    percentage: snapshot.percentage,
                    crowd_level: snapshot.crowd_level,
                    updated_at: Some(snapshot.recorded_at),
                }));
            }
        }

        Err(concurrent_update(space.id))
    }

    /// Returns the reading log of a space, newest first.
    ///
    /// # Returns
    /// - `Ok(Paginated<OccupancyReading>)` - Readings for the requested page
    /// - `Err(AppError::NotFound)` - No space with that id
    pub async fn history(
        &self,
        space_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<OccupancyReading>, AppError> {
        let space = self.find_space(space_id).await?;

        let (readings, total) = OccupancyRepository::new(self.db)
            .get_readings_paginated(space.id, page, per_page)
            .await?;

        Ok(Paginated::new(readings, total, page, per_page))
    }

    /// Derives percentage and crowd level, or `None` without positive capacity.
    fn snapshot(
        &self,
        count: i32,
        capacity: i32,
        recorded_at: DateTime<Utc>,
    ) -> Option<OccupancySnapshot> {
        let percentage = occupancy_percentage(count, capacity)?;

        Some(OccupancySnapshot {
            count,
            percentage,
            crowd_level: self.settings.thresholds.classify(percentage),
            recorded_at,
        })
    }

    async fn find_space(&self, space_id: i32) -> Result<Space, AppError> {
        SpaceRepository::new(self.db)
            .find_by_id(space_id)
            .await?
            .ok_or_else(|| space_not_found(space_id))
    }

    /// Writes the snapshot as the space's current occupancy.
    ///
    /// Each attempt reads the stored version and replaces the row only if the
    /// version is unchanged, or inserts the first row. A zero-row update or a
    /// unique violation on insert means another writer got there first.
    async fn commit(&self, space_id: i32, snapshot: &OccupancySnapshot) -> Result<(), AppError> {
        let repo = OccupancyRepository::new(self.db);

        for attempt in 1..=self.settings.max_retries {
            let written = match repo.find_current(space_id).await? {
                Some(current) => {
                    repo.update_current(space_id, current.version, snapshot)
                        .await?
                }
                None => match repo.insert_current(space_id, snapshot).await {
                    Ok(_) => true,
                    Err(err)
                        if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
                    {
                        false
                    }
                    Err(err) => return Err(err.into()),
                },
            };

            if written {
                return Ok(());
            }

            tracing::debug!(
                "Occupancy write for space {} lost a race on attempt {}",
                space_id,
                attempt
            );
        }

        tracing::warn!(
            "Giving up occupancy write for space {} after {} attempts",
            space_id,
            self.settings.max_retries
        );

        Err(concurrent_update(space_id))
    }
}

fn concurrent_update(space_id: i32) -> AppError {
    AppError::Conflict(format!(
        "Occupancy of space {} is being updated concurrently, try again",
        space_id
    ))
}
