//! Factories for occupancy readings and current occupancy rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Appends a raw occupancy reading for a space at the given time.
pub async fn create_reading_at(
    db: &DatabaseConnection,
    space_id: i32,
    count: i32,
    recorded_at: DateTime<Utc>,
) -> Result<entity::occupancy_reading::Model, DbErr> {
    entity::occupancy_reading::ActiveModel {
        space_id: ActiveValue::Set(space_id),
        count: ActiveValue::Set(count),
        source: ActiveValue::Set(None),
        recorded_at: ActiveValue::Set(recorded_at),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Appends a raw occupancy reading for a space recorded now.
pub async fn create_reading(
    db: &DatabaseConnection,
    space_id: i32,
    count: i32,
) -> Result<entity::occupancy_reading::Model, DbErr> {
    create_reading_at(db, space_id, count, Utc::now()).await
}

/// Inserts a current occupancy row for a space with version 1.
pub async fn create_current_occupancy(
    db: &DatabaseConnection,
    space_id: i32,
    count: i32,
    percentage: f64,
    crowd_level: &str,
) -> Result<entity::current_occupancy::Model, DbErr> {
    entity::current_occupancy::ActiveModel {
        space_id: ActiveValue::Set(space_id),
        count: ActiveValue::Set(count),
        percentage: ActiveValue::Set(percentage),
        crowd_level: ActiveValue::Set(crowd_level.to_string()),
        version: ActiveValue::Set(1),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
