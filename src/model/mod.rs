//! Request and response DTOs forming the public JSON contract of the API.
//!
//! These types are what crosses the HTTP boundary. Server-side domain models
//! live in `server::model` and are converted to and from these at the
//! controller layer.

pub mod api;
pub mod auth;
pub mod favorite;
pub mod occupancy;
pub mod review;
pub mod space;
pub mod user;
