//! Review factory for creating test review entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    space_id: i32,
    rating: i32,
    content: String,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with a rating of 4 and short content.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, space_id: i32) -> Self {
        Self {
            db,
            user_id,
            space_id,
            rating: 4,
            content: "Quiet in the mornings".to_string(),
        }
    }

    /// Sets the rating for the review.
    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the content for the review.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builds and inserts the review entity into the database.
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now();
        entity::review::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            space_id: ActiveValue::Set(self.space_id),
            rating: ActiveValue::Set(self.rating),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values.
pub async fn create_review(
    db: &DatabaseConnection,
    user_id: i32,
    space_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, user_id, space_id).build().await
}
