use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ReviewDto {
    pub id: i32,
    pub user_id: i32,
    pub space_id: i32,
    pub rating: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateReviewDto {
    /// 1 to 5 inclusive.
    pub rating: i32,
    pub content: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateReviewDto {
    pub rating: Option<i32>,
    pub content: Option<String>,
}
