//! HTTP request handlers.
//!
//! Each handler authenticates through `AuthGuard`, converts request DTOs into
//! server-side params, calls the matching service and wraps the result in an
//! `ApiResponse` envelope.

pub mod auth;
pub mod favorite;
pub mod occupancy;
pub mod param;
pub mod review;
pub mod space;
pub mod user;
