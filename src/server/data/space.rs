//! Space data repository for database operations.
//!
//! Provides `SpaceRepository` for creating, reading, updating and deleting
//! spaces. Deleting a space also removes its readings, current occupancy,
//! reviews and favorites.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::space::{CreateSpaceParam, Space, UpdateSpaceParam};

/// Repository providing database operations for spaces.
pub struct SpaceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpaceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new space.
    ///
    /// # Returns
    /// - `Ok(Space)` - The created space
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateSpaceParam) -> Result<Space, DbErr> {
        let now = Utc::now();

        let entity = entity::space::ActiveModel {
            owner_id: ActiveValue::Set(param.owner_id),
            name: ActiveValue::Set(param.name),
            address: ActiveValue::Set(param.address),
            capacity: ActiveValue::Set(param.capacity),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Space::from_entity(entity))
    }

    /// Finds a space by id.
    ///
    /// # Returns
    /// - `Ok(Some(Space))` - Space found
    /// - `Ok(None)` - No space with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Space>, DbErr> {
        let entity = entity::prelude::Space::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Space::from_entity))
    }

    /// Gets spaces with pagination, ordered by id.
    ///
    /// # Returns
    /// - `Ok((spaces, total))` - Spaces for the requested page and total count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Space>, u64), DbErr> {
        let paginator = entity::prelude::Space::find()
            .order_by_asc(entity::space::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let spaces = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Space::from_entity)
            .collect();

        Ok((spaces, total))
    }

    /// Applies a partial update to a space.
    ///
    /// Only fields present in `param` are written; the rest keep their
    /// stored values.
    ///
    /// # Returns
    /// - `Ok(Some(Space))` - The updated space
    /// - `Ok(None)` - No space with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateSpaceParam) -> Result<Option<Space>, DbErr> {
        let Some(entity) = entity::prelude::Space::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(address) = param.address {
            active.address = ActiveValue::Set(address);
        }
        if let Some(capacity) = param.capacity {
            active.capacity = ActiveValue::Set(capacity);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(Some(description));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Space::from_entity(entity)))
    }

    /// Deletes a space and every row that references it, in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Space deleted
    /// - `Ok(false)` - No space with that id
    /// - `Err(DbErr)` - Database error, nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        delete_space_dependents(&txn, &[id]).await?;
        let result = entity::prelude::Space::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

/// Deletes readings, current occupancy, reviews and favorites of the spaces.
pub(crate) async fn delete_space_dependents<C: ConnectionTrait>(
    conn: &C,
    space_ids: &[i32],
) -> Result<(), DbErr> {
    if space_ids.is_empty() {
        return Ok(());
    }

    let ids = space_ids.to_vec();

    entity::prelude::OccupancyReading::delete_many()
        .filter(entity::occupancy_reading::Column::SpaceId.is_in(ids.clone()))
        .exec(conn)
        .await?;
    entity::prelude::CurrentOccupancy::delete_many()
        .filter(entity::current_occupancy::Column::SpaceId.is_in(ids.clone()))
        .exec(conn)
        .await?;
    entity::prelude::Review::delete_many()
        .filter(entity::review::Column::SpaceId.is_in(ids.clone()))
        .exec(conn)
        .await?;
    entity::prelude::Favorite::delete_many()
        .filter(entity::favorite::Column::SpaceId.is_in(ids))
        .exec(conn)
        .await?;

    Ok(())
}
