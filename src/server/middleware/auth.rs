//! Request authentication and role-based authorization.
//!
//! Controllers build an `AuthGuard` from the request headers and call
//! `require` with the permissions the operation needs. The guard validates
//! the bearer token, reloads the user so role changes and deletions take
//! effect immediately, and checks every permission against the stored role.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::{space::SpaceRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{space::Space, user::User},
        service::{
            auth::token::{TokenKind, TokenService},
            space::space_not_found,
        },
    },
};

/// Operations gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Any signed-in user.
    Authenticated,
    /// Create spaces.
    CreateSpace,
    /// Update, delete and report occupancy for spaces owned by someone else.
    ManageAnySpace,
    /// Delete reviews written by someone else.
    ModerateReviews,
    /// List users, change roles and delete users.
    ManageUsers,
}

impl Role {
    /// Whether a user with this role holds `permission`.
    pub fn grants(&self, permission: Permission) -> bool {
        match permission {
            Permission::Authenticated => true,
            Permission::CreateSpace => matches!(self, Role::Owner | Role::Admin),
            Permission::ManageAnySpace | Permission::ModerateReviews | Permission::ManageUsers => {
                *self == Role::Admin
            }
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the request and checks every permission.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the caller must hold; empty means any
    ///   authenticated user
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user, as currently stored
    /// - `Err(AppError::AuthErr)` - 401 for missing/invalid/expired tokens or
    ///   deleted users, 403 for a missing permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = bearer_token(self.headers)?;
        let claims = self.tokens.validate(token, TokenKind::Access)?;
        let user_id = claims.user_id()?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            if !user.role.grants(*permission) {
                return Err(AuthError::AccessDenied(
                    user.id,
                    format!(
                        "role {} lacks permission {:?}",
                        user.role, permission
                    ),
                )
                .into());
            }
        }

        Ok(user)
    }

    /// Authenticates the request and requires the caller to own the space,
    /// unless they may manage any space.
    ///
    /// # Returns
    /// - `Ok((User, Space))` - Caller and the space they may modify
    /// - `Err(AppError::AuthErr)` - Not authenticated, or neither owner nor admin
    /// - `Err(AppError::NotFound)` - No space with that id
    pub async fn require_space_owner(&self, space_id: i32) -> Result<(User, Space), AppError> {
        let user = self.require(&[]).await?;

        let space = SpaceRepository::new(self.db)
            .find_by_id(space_id)
            .await?
            .ok_or_else(|| space_not_found(space_id))?;

        if space.owner_id != user.id && !user.role.grants(Permission::ManageAnySpace) {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("attempted to modify space {} owned by user {}", space.id, space.owner_id),
            )
            .into());
        }

        Ok((user, space))
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidTokenFormat)?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => Err(AuthError::InvalidTokenFormat),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn role_permission_matrix() {
        assert!(Role::User.grants(Permission::Authenticated));
        assert!(!Role::User.grants(Permission::CreateSpace));
        assert!(Role::Owner.grants(Permission::CreateSpace));
        assert!(!Role::Owner.grants(Permission::ManageAnySpace));
        assert!(!Role::Owner.grants(Permission::ManageUsers));
        assert!(Role::Admin.grants(Permission::CreateSpace));
        assert!(Role::Admin.grants(Permission::ManageAnySpace));
        assert!(Role::Admin.grants(Permission::ModerateReviews));
        assert!(Role::Admin.grants(Permission::ManageUsers));
    }

    #[test]
    fn parses_bearer_header() {
        let mut headers = HeaderMap::new();
        assert!(matches!(bearer_token(&headers), Err(AuthError::MissingToken)));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::InvalidTokenFormat)
        ));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::InvalidTokenFormat)
        ));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("bearer abc.def.ghi"));
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }
}
