//! User service for business logic.
//!
//! This module provides the `UserService` for the calling user's own profile
//! and for admin user management (listing, role changes and deletion). It
//! works with domain models rather than DTOs.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::{
            pagination::Paginated,
            user::{UpdateProfileParam, User},
        },
        service::auth::{password::hash_password, validate_password},
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_user(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Updates the calling user's name and/or password.
    ///
    /// A new password is validated and hashed before storage. Omitted fields
    /// keep their stored values.
    ///
    /// # Arguments
    /// - `id` - Id of the user being updated
    /// - `param` - Optional new name and password
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::BadRequest)` - Blank name or short password
    /// - `Err(AppError::NotFound)` - User no longer exists
    pub async fn update_profile(
        &self,
        id: i32,
        param: UpdateProfileParam,
    ) -> Result<User, AppError> {
        let name = match param.name {
            Some(name) if name.trim().is_empty() => {
                return Err(AppError::BadRequest("Name must not be empty".to_string()));
            }
            Some(name) => Some(name.trim().to_string()),
            None => None,
        };

        let password_hash = match param.password {
            Some(password) => {
                validate_password(&password)?;
                Some(hash_password(&password).await?)
            }
            None => None,
        };

        UserRepository::new(self.db)
            .update_profile(id, name, password_hash)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Retrieves all users with pagination.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Users per page
    ///
    /// # Returns
    /// - `Ok(Paginated<User>)` - Users for the requested page with pagination metadata
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_all_users(&self, page: u64, per_page: u64) -> Result<Paginated<User>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(users, total, page, per_page))
    }

    /// Replaces a user's role.
    ///
    /// # Returns
    /// - `Ok(User)` - User with the new role
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn set_role(&self, id: i32, role: Role) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .set_role(id, role)
            .await?
            .ok_or_else(|| user_not_found(id))?;

        tracing::info!("Changed role of user {} to {}", id, role);

        Ok(user)
    }

    /// Deletes a user and everything they own.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete_user(&self, id: i32) -> Result<(), AppError> {
        let deleted = UserRepository::new(self.db).delete(id).await?;
        if !deleted {
            return Err(user_not_found(id));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}

fn user_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}
