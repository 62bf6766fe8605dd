//! Review data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::review::{CreateReviewParam, Review, UpdateReviewParam};

/// Repository providing database operations for reviews.
pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a review.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review
    /// - `Err(DbErr)` - Database error, including a unique violation when the
    ///   user already reviewed the space
    pub async fn create(&self, param: CreateReviewParam) -> Result<Review, DbErr> {
        let now = Utc::now();

        let entity = entity::review::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            space_id: ActiveValue::Set(param.space_id),
            rating: ActiveValue::Set(param.rating),
            content: ActiveValue::Set(param.content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let entity = entity::prelude::Review::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Review::from_entity))
    }

    /// Finds the review a user wrote for a space, if any.
    pub async fn find_by_user_and_space(
        &self,
        user_id: i32,
        space_id: i32,
    ) -> Result<Option<Review>, DbErr> {
        let entity = entity::prelude::Review::find()
            .filter(entity::review::Column::UserId.eq(user_id))
            .filter(entity::review::Column::SpaceId.eq(space_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Review::from_entity))
    }

    /// Gets the reviews of a space with pagination, newest first.
    ///
    /// # Returns
    /// - `Ok((reviews, total))` - Reviews for the requested page and total count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_by_space_paginated(
        &self,
        space_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Review>, u64), DbErr> {
        let paginator = entity::prelude::Review::find()
            .filter(entity::review::Column::SpaceId.eq(space_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let reviews = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Review::from_entity)
            .collect();

        Ok((reviews, total))
    }

    /// Applies a partial update to a review.
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - The updated review
    /// - `Ok(None)` - No review with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateReviewParam,
    ) -> Result<Option<Review>, DbErr> {
        let Some(entity) = entity::prelude::Review::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(rating) = param.rating {
            active.rating = ActiveValue::Set(rating);
        }
        if let Some(content) = param.content {
            active.content = ActiveValue::Set(content);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Review::from_entity(entity)))
    }

    /// Deletes a review.
    ///
    /// # Returns
    /// - `Ok(true)` - Review deleted
    /// - `Ok(false)` - No review with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
