use sea_orm::EntityTrait;

use super::*;

/// Tests deleting a user who owns a space with occupancy data and reviews.
///
/// Verifies that the owned space and every row referencing it or the user
/// are removed together with the user.
///
/// Expected: Ok(true) and no dependent rows left
#[tokio::test]
async fn deletes_user_and_dependents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, space) = factory::helpers::create_space_with_owner(db).await?;
    let reviewer = factory::create_user(db).await?;
    factory::create_reading(db, space.id, 10).await?;
    factory::create_current_occupancy(db, space.id, 10, 10.0, "LOW").await?;
    factory::create_review(db, reviewer.id, space.id).await?;
    factory::create_favorite(db, reviewer.id, space.id).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(owner.id).await?);

    assert!(repo.find_by_id(owner.id).await?.is_none());
    assert!(entity::prelude::Space::find_by_id(space.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(
        entity::prelude::Review::find().all(db).await?.len(),
        0,
        "reviews of the deleted space should be removed"
    );
    assert!(repo.find_by_id(reviewer.id).await?.is_some());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete(404).await?);

    Ok(())
}
