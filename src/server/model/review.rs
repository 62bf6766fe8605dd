use chrono::{DateTime, Utc};

use crate::{
    model::review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
    server::error::AppError,
};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub space_id: i32,
    pub rating: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            user_id: self.user_id,
            space_id: self.space_id,
            rating: self.rating,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            space_id: entity.space_id,
            rating: entity.rating,
            content: entity.content,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReviewParam {
    pub user_id: i32,
    pub space_id: i32,
    pub rating: i32,
    pub content: String,
}

impl CreateReviewParam {
    pub fn from_dto(user_id: i32, space_id: i32, dto: CreateReviewDto) -> Self {
        Self {
            user_id,
            space_id,
            rating: dto.rating,
            content: dto.content,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_rating(self.rating)?;
        validate_content(&self.content)
    }
}

/// Partial review update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateReviewParam {
    pub rating: Option<i32>,
    pub content: Option<String>,
}

impl From<UpdateReviewDto> for UpdateReviewParam {
    fn from(dto: UpdateReviewDto) -> Self {
        Self {
            rating: dto.rating,
            content: dto.content,
        }
    }
}

impl UpdateReviewParam {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        if let Some(content) = &self.content {
            validate_content(content)?;
        }
        Ok(())
    }
}

fn validate_rating(rating: i32) -> Result<(), AppError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::BadRequest(format!(
            "Rating must be between {} and {}, got {}",
            MIN_RATING, MAX_RATING, rating
        )));
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<(), AppError> {
    if content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Review content must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }
}
