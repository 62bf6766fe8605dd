use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct SpaceDto {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub address: String,
    pub capacity: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateSpaceDto {
    pub name: String,
    pub address: String,
    pub capacity: i32,
    pub description: Option<String>,
}

/// Partial update. Omitted fields keep their stored values.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateSpaceDto {
    pub name: Option<String>,
    pub address: Option<String>,
    pub capacity: Option<i32>,
    pub description: Option<String>,
}
