use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, CODE_FORBIDDEN, CODE_UNAUTHORIZED};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header on a protected route.
    #[error("Missing Authorization header")]
    MissingToken,

    /// Header present but not of the form `Bearer <token>`.
    #[error("Authorization header must use the Bearer scheme")]
    InvalidTokenFormat,

    /// Signature, structure or claim validation failed.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token signature is valid but `exp` is in the past.
    #[error("Token has expired")]
    TokenExpired,

    /// A refresh token was presented where an access token is required, or
    /// the reverse.
    #[error("Wrong token type, expected {expected}")]
    WrongTokenType { expected: &'static str },

    /// Email unknown or password mismatch. Deliberately indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Token refers to a user that no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks the permission for the operation.
    ///
    /// # Fields
    /// - ID of the user who was denied
    /// - Description of what was attempted, for server-side logs
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Self-registration with the `ADMIN` role.
    #[error("Cannot sign up with the ADMIN role")]
    AdminSignupForbidden,
}

/// Converts authentication errors into HTTP responses.
///
/// Denials are logged at debug level with full detail; the client receives
/// a short generic message.
///
/// # Returns
/// - 401 Unauthorized - missing, malformed, invalid or expired tokens, bad
///   credentials, or users that no longer exist
/// - 403 Forbidden - insufficient role or ownership
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken => error_response(
                StatusCode::UNAUTHORIZED,
                CODE_UNAUTHORIZED,
                "Authentication required".to_string(),
            ),
            Self::InvalidTokenFormat
            | Self::InvalidToken(_)
            | Self::WrongTokenType { .. }
            | Self::UserNotInDatabase(_) => error_response(
                StatusCode::UNAUTHORIZED,
                CODE_UNAUTHORIZED,
                "Invalid token".to_string(),
            ),
            Self::TokenExpired => error_response(
                StatusCode::UNAUTHORIZED,
                CODE_UNAUTHORIZED,
                "Token has expired".to_string(),
            ),
            Self::InvalidCredentials => error_response(
                StatusCode::UNAUTHORIZED,
                CODE_UNAUTHORIZED,
                "Invalid email or password".to_string(),
            ),
            Self::AccessDenied(_, _) => error_response(
                StatusCode::FORBIDDEN,
                CODE_FORBIDDEN,
                "You do not have permission to perform this action".to_string(),
            ),
            Self::AdminSignupForbidden => error_response(
                StatusCode::FORBIDDEN,
                CODE_FORBIDDEN,
                "The ADMIN role cannot be self-assigned".to_string(),
            ),
        }
    }
}
