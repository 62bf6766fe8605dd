//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, uniqueness and existence checks
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Concurrency**: Serialising occupancy writes per space

pub mod auth;
pub mod favorite;
pub mod occupancy;
pub mod review;
pub mod space;
pub mod user;

#[cfg(test)]
mod test;
