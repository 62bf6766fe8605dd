//! Request extractors that report rejections through the error envelope.
//!
//! Axum's stock `Json`, `Query` and `Path` extractors answer malformed input
//! with a plain-text body. These wrappers convert the rejection into
//! `AppError::BadRequest` so clients always receive an `ErrorDto`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
