use super::*;

/// Tests a partial review update that only changes the rating.
///
/// Expected: Ok(Some) with new rating and original content
#[tokio::test]
async fn keeps_content_when_only_rating_changes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, space) = factory::helpers::create_space_with_owner(db).await?;
    let stored = factory::review::ReviewFactory::new(db, owner.id, space.id)
        .rating(2)
        .content("Too loud")
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let updated = repo
        .update(
            stored.id,
            UpdateReviewParam {
                rating: Some(3),
                content: None,
            },
        )
        .await?
        .expect("review should exist");

    assert_eq!(updated.rating, 3);
    assert_eq!(updated.content, "Too loud");

    Ok(())
}
