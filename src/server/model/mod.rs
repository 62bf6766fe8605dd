//! Domain models and operation parameters.
//!
//! Domain models are what services work with. Repositories convert entity
//! models into these at the data boundary and controllers convert them into
//! DTOs at the HTTP boundary. Parameter types carry validated input from
//! controllers into services.

pub mod favorite;
pub mod occupancy;
pub mod pagination;
pub mod review;
pub mod space;
pub mod user;
