//! Space factory for creating test space entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test spaces with customizable fields.
pub struct SpaceFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    address: String,
    capacity: i32,
    description: Option<String>,
}

impl<'a> SpaceFactory<'a> {
    /// Creates a new SpaceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Space {id}"`
    /// - address: `"{id} Test Street"`
    /// - capacity: `100`
    /// - description: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of the owning user (must exist)
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Space {}", id),
            address: format!("{} Test Street", id),
            capacity: 100,
            description: None,
        }
    }

    /// Sets the name for the space.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the address for the space.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the capacity for the space. Zero or negative values are allowed so
    /// tests can model misconfigured spaces.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the description for the space.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the space entity into the database.
    pub async fn build(self) -> Result<entity::space::Model, DbErr> {
        let now = Utc::now();
        entity::space::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            capacity: ActiveValue::Set(self.capacity),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a space with default values owned by `owner_id`.
pub async fn create_space(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::space::Model, DbErr> {
    SpaceFactory::new(db, owner_id).build().await
}
