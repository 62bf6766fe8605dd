//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the
//! fields they care about. Each entity has a `*Factory` builder for
//! customization and a `create_*` shorthand for the default case.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::user::UserFactory::new(&db).role("OWNER").build().await?;
//! let space = factory::space::SpaceFactory::new(&db, owner.id).capacity(100).build().await?;
//! let review = factory::create_review(&db, user.id, space.id).await?;
//! ```

pub mod favorite;
pub mod helpers;
pub mod occupancy;
pub mod review;
pub mod space;
pub mod user;

pub use favorite::create_favorite;
pub use occupancy::{create_current_occupancy, create_reading};
pub use review::create_review;
pub use space::create_space;
pub use user::{create_owner, create_user};
