use super::*;

/// Tests deleting a space with readings, occupancy, reviews and favorites.
///
/// Expected: Ok(true) and every dependent row removed
#[tokio::test]
async fn deletes_space_and_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, space) = factory::helpers::create_space_with_owner(db).await?;
    let (_, other_space) = factory::helpers::create_space_with_owner(db).await?;
    let visitor = factory::create_user(db).await?;

    factory::create_reading(db, space.id, 3).await?;
    factory::create_reading(db, other_space.id, 4).await?;
    factory::create_current_occupancy(db, space.id, 3, 3.0, "LOW").await?;
    factory::create_review(db, visitor.id, space.id).await?;
    factory::create_favorite(db, visitor.id, space.id).await?;

    let repo = SpaceRepository::new(db);
    assert!(repo.delete(space.id).await?);

    assert!(repo.find_by_id(space.id).await?.is_none());
    assert!(entity::prelude::CurrentOccupancy::find_by_id(space.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Review::find().all(db).await?.is_empty());
    assert!(entity::prelude::Favorite::find().all(db).await?.is_empty());

    let readings = entity::prelude::OccupancyReading::find().all(db).await?;
    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].space_id, other_space.id);

    Ok(())
}

/// Tests deleting a space that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_space() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpaceRepository::new(db);

    assert!(!repo.delete(12345).await?);

    Ok(())
}
