use super::*;

/// Tests that listing is scoped to one space.
///
/// Expected: Ok with only the space's reviews and matching total
#[tokio::test]
async fn returns_only_reviews_of_space() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, space) = factory::helpers::create_space_with_owner(db).await?;
    let (_, other) = factory::helpers::create_space_with_owner(db).await?;

    for _ in 0..3 {
        let user = factory::create_user(db).await?;
        factory::create_review(db, user.id, space.id).await?;
    }
    let user = factory::create_user(db).await?;
    factory::create_review(db, user.id, other.id).await?;

    let repo = ReviewRepository::new(db);
    let (reviews, total) = repo.get_by_space_paginated(space.id, 0, 10).await?;

    assert_eq!(total, 3);
    assert!(reviews.iter().all(|r| r.space_id == space.id));

    Ok(())
}
