//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values across factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an `OWNER` user and a space they own with default values.
///
/// # Returns
/// - `Ok((owner, space))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_space_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::space::Model), DbErr> {
    let owner = crate::factory::user::create_owner(db).await?;
    let space = crate::factory::space::create_space(db, owner.id).await?;

    Ok((owner, space))
}
