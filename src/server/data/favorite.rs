//! Favorite data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{favorite::Favorite, space::Space};

/// Repository providing database operations for favorites.
pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a space as favorite of a user.
    ///
    /// # Returns
    /// - `Ok(DateTime)` - Time the favorite was recorded
    /// - `Err(DbErr)` - Database error, including a unique violation when the
    ///   pair already exists
    pub async fn create(
        &self,
        user_id: i32,
        space_id: i32,
    ) -> Result<chrono::DateTime<Utc>, DbErr> {
        let entity = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            space_id: ActiveValue::Set(space_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(entity.created_at)
    }

    pub async fn exists(&self, user_id: i32, space_id: i32) -> Result<bool, DbErr> {
        let entity = entity::prelude::Favorite::find_by_id((user_id, space_id))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Removes a favorite.
    ///
    /// # Returns
    /// - `Ok(true)` - Favorite removed
    /// - `Ok(false)` - The pair was not a favorite
    pub async fn delete(&self, user_id: i32, space_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_by_id((user_id, space_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets a user's favorites with their spaces, most recent first.
    ///
    /// # Returns
    /// - `Ok((favorites, total))` - Favorites for the requested page and total count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Favorite>, u64), DbErr> {
        let paginator = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_desc(entity::favorite::Column::CreatedAt)
            .order_by_desc(entity::favorite::Column::SpaceId)
            .find_also_related(entity::prelude::Space)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let favorites = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .filter_map(|(favorite, space)| {
                space.map(|space| Favorite {
                    space: Space::from_entity(space),
                    favorited_at: favorite.created_at,
                })
            })
            .collect();

        Ok((favorites, total))
    }
}
