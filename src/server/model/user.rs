//! User domain models and parameters.
//!
//! Provides the `User` domain model, the credential-bearing variant used only
//! during login, and the parameter types for signup and profile updates.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{Role, UpdateProfileDto, UserDto},
    server::{error::AppError, util::parse::parse_stored},
};

/// Minimum password length accepted at signup and on password change.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// An application user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    /// The user's single role.
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored role is not a
    ///   known `Role`
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = parse_stored("role", entity.role, entity.id)?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// A user together with their stored password hash, used to verify logins.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let password_hash = entity.password_hash.clone();

        Ok(Self {
            user: User::from_entity(entity)?,
            password_hash,
        })
    }
}

/// Parameters for inserting a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: Role,
}

/// Profile changes requested by the calling user. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParam {
    pub name: Option<String>,
    /// New plain-text password, hashed by the service before storage.
    pub password: Option<String>,
}

impl From<UpdateProfileDto> for UpdateProfileParam {
    fn from(dto: UpdateProfileDto) -> Self {
        Self {
            name: dto.name,
            password: dto.password,
        }
    }
}

/// Normalises an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Checks the minimal shape of an email address: one `@` with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice@"));
        assert!(!is_valid_email("a@b@c"));
    }
}
