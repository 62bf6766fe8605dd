//! Favorite service for business logic.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{favorite::FavoriteRepository, space::SpaceRepository},
    error::AppError,
    model::{favorite::Favorite, pagination::Paginated},
    service::space::space_not_found,
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a space as a favorite of the user.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The new favorite with its space
    /// - `Err(AppError::NotFound)` - No space with that id
    /// - `Err(AppError::Conflict)` - Already a favorite
    pub async fn add(&self, user_id: i32, space_id: i32) -> Result<Favorite, AppError> {
        let space = SpaceRepository::new(self.db)
            .find_by_id(space_id)
            .await?
            .ok_or_else(|| space_not_found(space_id))?;

        let favorite_repo = FavoriteRepository::new(self.db);
        if favorite_repo.exists(user_id, space_id).await? {
            return Err(already_favorite(space_id));
        }

        match favorite_repo.create(user_id, space_id).await {
            Ok(favorited_at) => Ok(Favorite {
                space,
                favorited_at,
            }),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(already_favorite(space_id))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Removes a space from the user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite removed
    /// - `Err(AppError::NotFound)` - The space was not a favorite
    pub async fn remove(&self, user_id: i32, space_id: i32) -> Result<(), AppError> {
        let removed = FavoriteRepository::new(self.db)
            .delete(user_id, space_id)
            .await?;

        if !removed {
            return Err(AppError::NotFound(format!(
                "Space {} is not in your favorites",
                space_id
            )));
        }

        Ok(())
    }

    /// Lists the user's favorites, most recent first.
    pub async fn list(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Favorite>, AppError> {
        let (favorites, total) = FavoriteRepository::new(self.db)
            .get_by_user_paginated(user_id, page, per_page)
            .await?;

        Ok(Paginated::new(favorites, total, page, per_page))
    }
}

fn already_favorite(space_id: i32) -> AppError {
    AppError::Conflict(format!("Space {} is already in your favorites", space_id))
}
