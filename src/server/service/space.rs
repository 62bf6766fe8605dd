//! Space service for business logic.
//!
//! Creation, listing, lookup, partial update and deletion of spaces. Who may
//! modify a space is decided by the caller through `AuthGuard`; this service
//! only enforces existence and field validity.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::space::SpaceRepository,
    error::AppError,
    model::{
        pagination::Paginated,
        space::{CreateSpaceParam, Space, UpdateSpaceParam},
    },
};

pub struct SpaceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpaceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a space.
    ///
    /// # Returns
    /// - `Ok(Space)` - The created space
    /// - `Err(AppError::BadRequest)` - Blank name or address, or capacity <= 0
    pub async fn create(&self, param: CreateSpaceParam) -> Result<Space, AppError> {
        param.validate()?;

        let space = SpaceRepository::new(self.db).create(param).await?;

        tracing::info!("Created space {} for owner {}", space.id, space.owner_id);

        Ok(space)
    }

    /// Retrieves a space by id.
    ///
    /// # Returns
    /// - `Ok(Space)` - Space found
    /// - `Err(AppError::NotFound)` - No space with that id
    pub async fn get(&self, id: i32) -> Result<Space, AppError> {
        SpaceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| space_not_found(id))
    }

    pub async fn list(&self, page: u64, per_page: u64) -> Result<Paginated<Space>, AppError> {
        let (spaces, total) = SpaceRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(spaces, total, page, per_page))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Space)` - Updated space
    /// - `Err(AppError::BadRequest)` - A provided field is invalid
    /// - `Err(AppError::NotFound)` - No space with that id
    pub async fn update(&self, id: i32, param: UpdateSpaceParam) -> Result<Space, AppError> {
        param.validate()?;

        SpaceRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| space_not_found(id))
    }

    /// Deletes a space with its readings, occupancy, reviews and favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Space deleted
    /// - `Err(AppError::NotFound)` - No space with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = SpaceRepository::new(self.db).delete(id).await?;
        if !deleted {
            return Err(space_not_found(id));
        }

        tracing::info!("Deleted space {}", id);

        Ok(())
    }
}

pub(crate) fn space_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Space {} not found", id))
}
