//! ZeroQ Test Utils
//!
//! Shared testing utilities for the ZeroQ backend. Provides a builder for test
//! contexts backed by in-memory SQLite databases whose tables are generated
//! straight from the SeaORM entities, plus factories for seeding rows.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn reports_occupancy() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_occupancy_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (owner, space) = factory::helpers::create_space_with_owner(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
