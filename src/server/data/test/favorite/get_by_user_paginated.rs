use super::*;

/// Tests listing a user's favorites with their spaces.
///
/// Expected: Ok with only that user's favorites, each carrying its space
#[tokio::test]
async fn returns_user_favorites_with_spaces() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = factory::helpers::create_space_with_owner(db).await?;
    let (_, second) = factory::helpers::create_space_with_owner(db).await?;
    let user = factory::create_user(db).await?;
    let other_user = factory::create_user(db).await?;

    factory::create_favorite(db, user.id, first.id).await?;
    factory::create_favorite(db, user.id, second.id).await?;
    factory::create_favorite(db, other_user.id, first.id).await?;

    let repo = FavoriteRepository::new(db);
    let (favorites, total) = repo.get_by_user_paginated(user.id, 0, 10).await?;

    assert_eq!(total, 2);
    let mut space_ids: Vec<i32> = favorites.iter().map(|f| f.space.id).collect();
    space_ids.sort();
    assert_eq!(space_ids, vec![first.id, second.id]);

    Ok(())
}
