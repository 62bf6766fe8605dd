//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services and controllers.
//! Every variant maps to one category of the error envelope (`ErrorDto`) and
//! a matching HTTP status. Infrastructure failures are logged here, once, and
//! reach the client only as an opaque `INTERNAL_ERROR`.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_CONFLICT: &str = "CONFLICT";
pub const CODE_UNAUTHORIZED: &str = "UNAUTHORIZED";
pub const CODE_FORBIDDEN: &str = "FORBIDDEN";
pub const CODE_VALIDATION: &str = "VALIDATION_ERROR";
pub const CODE_INTERNAL: &str = "INTERNAL_ERROR";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Unexpected internal condition, e.g. corrupt stored data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Referenced entity does not exist. 404.
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation or an unresolvable concurrent write. 409.
    #[error("{0}")]
    Conflict(String),

    /// Malformed or out-of-range input. 400.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message. 500.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Builds an error envelope response.
pub(crate) fn error_response(status: StatusCode, code: &str, message: String) -> Response {
    (
        status,
        Json(ErrorDto {
            success: false,
            code: code.to_string(),
            message,
        }),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `BadRequest`
/// - 401 Unauthorized / 403 Forbidden - `AuthErr`, delegated to `AuthError`
/// - 404 Not Found - `NotFound`
/// - 409 Conflict - `Conflict`
/// - 500 Internal Server Error - everything else, with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, CODE_NOT_FOUND, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, CODE_CONFLICT, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, CODE_VALIDATION, msg),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                InternalServerError::generic()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into an opaque 500 response.
///
/// Logs the full error server-side and returns only a generic message.
pub struct InternalServerError<E>(pub E);

impl InternalServerError<()> {
    fn generic() -> Response {
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            CODE_INTERNAL,
            "Internal server error".to_string(),
        )
    }
}

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        InternalServerError::generic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_errors_to_status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Conflict("x".into()), StatusCode::CONFLICT),
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (
                AppError::InternalError("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::DbErr(sea_orm::DbErr::Custom("connection refused".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::AuthErr(AuthError::TokenExpired),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::AuthErr(AuthError::AccessDenied(1, "no".into())),
                StatusCode::FORBIDDEN,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
