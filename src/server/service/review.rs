//! Review service for business logic.
//!
//! One review per user and space. Authorship checks happen here because
//! they depend on the stored review, not only on the caller's role.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{review::ReviewRepository, space::SpaceRepository},
    error::{auth::AuthError, AppError},
    middleware::auth::Permission,
    model::{
        pagination::Paginated,
        review::{CreateReviewParam, Review, UpdateReviewParam},
        user::User,
    },
    service::space::space_not_found,
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review for a space.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review
    /// - `Err(AppError::BadRequest)` - Rating outside 1..=5 or blank content
    /// - `Err(AppError::NotFound)` - No space with that id
    /// - `Err(AppError::Conflict)` - The user already reviewed this space
    pub async fn create(&self, param: CreateReviewParam) -> Result<Review, AppError> {
        param.validate()?;

        if SpaceRepository::new(self.db)
            .find_by_id(param.space_id)
            .await?
            .is_none()
        {
            return Err(space_not_found(param.space_id));
        }

        let review_repo = ReviewRepository::new(self.db);
        if review_repo
            .find_by_user_and_space(param.user_id, param.space_id)
            .await?
            .is_some()
        {
            return Err(duplicate_review(param.space_id));
        }

        let space_id = param.space_id;
        match review_repo.create(param).await {
            Ok(review) => Ok(review),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(duplicate_review(space_id))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Lists reviews of a space, newest first.
    ///
    /// # Returns
    /// - `Ok(Paginated<Review>)` - Reviews for the requested page
    /// - `Err(AppError::NotFound)` - No space with that id
    pub async fn list_by_space(
        &self,
        space_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Review>, AppError> {
        if SpaceRepository::new(self.db)
            .find_by_id(space_id)
            .await?
            .is_none()
        {
            return Err(space_not_found(space_id));
        }

        let (reviews, total) = ReviewRepository::new(self.db)
            .get_by_space_paginated(space_id, page, per_page)
            .await?;

        Ok(Paginated::new(reviews, total, page, per_page))
    }

    /// Updates a review. Only its author may do so.
    ///
    /// # Returns
    /// - `Ok(Review)` - Updated review
    /// - `Err(AppError::BadRequest)` - A provided field is invalid
    /// - `Err(AppError::NotFound)` - No review with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller is not the author
    pub async fn update(
        &self,
        caller: &User,
        id: i32,
        param: UpdateReviewParam,
    ) -> Result<Review, AppError> {
        param.validate()?;

        let review_repo = ReviewRepository::new(self.db);
        let review = review_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| review_not_found(id))?;

        if review.user_id != caller.id {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("attempted to edit review {} written by user {}", id, review.user_id),
            )
            .into());
        }

        review_repo
            .update(id, param)
            .await?
            .ok_or_else(|| review_not_found(id))
    }

    /// Deletes a review. Allowed for its author and for admins.
    ///
    /// # Returns
    /// - `Ok(())` - Review deleted
    /// - `Err(AppError::NotFound)` - No review with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller is neither author nor admin
    pub async fn delete(&self, caller: &User, id: i32) -> Result<(), AppError> {
        let review_repo = ReviewRepository::new(self.db);
        let review = review_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| review_not_found(id))?;

        if review.user_id != caller.id && !caller.role.grants(Permission::ModerateReviews) {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("attempted to delete review {} written by user {}", id, review.user_id),
            )
            .into());
        }

        if !review_repo.delete(id).await? {
            return Err(review_not_found(id));
        }

        Ok(())
    }
}

fn review_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Review {} not found", id))
}

fn duplicate_review(space_id: i32) -> AppError {
    AppError::Conflict(format!("You have already reviewed space {}", space_id))
}
