use super::*;

/// Tests adding and removing a favorite.
///
/// Expected: exists() follows create() and delete()
#[tokio::test]
async fn creates_and_deletes_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, space) = factory::helpers::create_space_with_owner(db).await?;
    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    assert!(!repo.exists(user.id, space.id).await?);

    repo.create(user.id, space.id).await?;
    assert!(repo.exists(user.id, space.id).await?);

    assert!(repo.delete(user.id, space.id).await?);
    assert!(!repo.exists(user.id, space.id).await?);
    assert!(!repo.delete(user.id, space.id).await?);

    Ok(())
}

/// Tests that the same pair cannot be stored twice.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, space) = factory::helpers::create_space_with_owner(db).await?;
    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.create(user.id, space.id).await?;

    assert!(repo.create(user.id, space.id).await.is_err());

    Ok(())
}
