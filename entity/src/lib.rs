//! SeaORM entity definitions for the ZeroQ schema.
//!
//! One module per table. The schema itself is owned by the `migration` crate;
//! these models must stay in step with it.

pub mod prelude;

pub mod current_occupancy;
pub mod favorite;
pub mod occupancy_reading;
pub mod review;
pub mod space;
pub mod user;
