use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Tables are generated from SeaORM entities using SQLite syntax and created
/// in the order they were added, so referenced tables must come first.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Space};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Space)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for space operations: `User` and `Space`.
    pub fn with_space_tables(self) -> Self {
        self.with_table(User).with_table(Space)
    }

    /// Adds the tables required for occupancy reporting.
    ///
    /// Equivalent to `with_space_tables()` followed by `OccupancyReading` and
    /// `CurrentOccupancy`.
    pub fn with_occupancy_tables(self) -> Self {
        self.with_space_tables()
            .with_table(OccupancyReading)
            .with_table(CurrentOccupancy)
    }

    /// Adds every table in the schema, in dependency order.
    pub fn with_all_tables(self) -> Self {
        self.with_occupancy_tables()
            .with_table(Review)
            .with_table(Favorite)
    }

    /// Builds the test context and creates all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
