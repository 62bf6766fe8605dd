use chrono::{DateTime, Utc};

use crate::{model::favorite::FavoriteDto, server::model::space::Space};

/// A space bookmarked by a user, with the time it was bookmarked.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub space: Space,
    pub favorited_at: DateTime<Utc>,
}

impl Favorite {
    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            space: self.space.into_dto(),
            favorited_at: self.favorited_at,
        }
    }
}
