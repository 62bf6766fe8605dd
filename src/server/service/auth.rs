//! Authentication service: signup, login and token refresh.
//!
//! Passwords are hashed with Argon2 (see `password`), tokens are issued and
//! validated by `TokenService` (see `token`). Login failures never reveal
//! whether the email or the password was wrong.

pub mod password;
pub mod token;

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::{auth::SignupDto, user::Role},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{
            is_valid_email, normalize_email, CreateUserParam, User, MIN_PASSWORD_LENGTH,
        },
        service::auth::{
            password::{hash_password, verify_password},
            token::{TokenKind, TokenPair, TokenService},
        },
    },
};

/// Parameters for self-registration.
#[derive(Debug, Clone)]
pub struct SignupParam {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Option<Role>,
}

impl From<SignupDto> for SignupParam {
    fn from(dto: SignupDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            name: dto.name,
            role: dto.role,
        }
    }
}

/// Rejects passwords shorter than `MIN_PASSWORD_LENGTH` characters.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

/// Service for signup, login and token refresh.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service holding the signing keys
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new user.
    ///
    /// Validates the input, refuses self-assigned `ADMIN`, checks the email is
    /// free and stores the user with an Argon2 password hash. The role
    /// defaults to `USER`.
    ///
    /// # Arguments
    /// - `param` - Email, password, display name and optional role
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AppError::BadRequest)` - Malformed email, blank name or short password
    /// - `Err(AppError::AuthErr(AdminSignupForbidden))` - Requested role is `ADMIN`
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn signup(&self, param: SignupParam) -> Result<User, AppError> {
        let email = normalize_email(&param.email);
        if !is_valid_email(&email) {
            return Err(AppError::BadRequest(format!(
                "'{}' is not a valid email address",
                param.email
            )));
        }

        let name = param.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name must not be empty".to_string()));
        }

        validate_password(&param.password)?;

        let role = param.role.unwrap_or(Role::User);
        if role == Role::Admin {
            return Err(AuthError::AdminSignupForbidden.into());
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.email_exists(&email).await? {
            return Err(email_conflict(&email));
        }

        let password_hash = hash_password(&param.password).await?;

        let result = user_repo
            .create(CreateUserParam {
                email: email.clone(),
                password_hash,
                name,
                role,
            })
            .await;

        match result {
            Err(AppError::DbErr(err))
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
            {
                Err(email_conflict(&email))
            }
            Ok(user) => {
                tracing::info!("Registered user {} with role {}", user.id, user.role);
                Ok(user)
            }
            Err(err) => Err(err),
        }
    }

    /// Verifies credentials and issues a token pair.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Credentials valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError)` - Database or token signing error
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo
            .find_credentials_by_email(&normalize_email(email))
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &credentials.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.tokens.issue_pair(&credentials.user)
    }

    /// Exchanges a refresh token for a new token pair.
    ///
    /// The new tokens carry the user's current role, not the role in the
    /// presented token.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - New access and refresh tokens
    /// - `Err(AppError::AuthErr)` - Invalid, expired or access token, or the
    ///   user no longer exists
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.tokens.validate(refresh_token, TokenKind::Refresh)?;
        let user_id = claims.user_id()?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        self.tokens.issue_pair(&user)
    }
}

fn email_conflict(email: &str) -> AppError {
    AppError::Conflict(format!("Email '{}' is already registered", email))
}
