use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::space::SpaceDto;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct FavoriteDto {
    pub space: SpaceDto,
    pub favorited_at: DateTime<Utc>,
}
