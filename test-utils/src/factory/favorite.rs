//! Favorite factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Marks `space_id` as a favorite of `user_id`.
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    space_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        space_id: ActiveValue::Set(space_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
