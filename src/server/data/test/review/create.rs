use super::*;

/// Tests creating a review and finding it by author and space.
///
/// Expected: Ok with the review retrievable by (user, space)
#[tokio::test]
async fn creates_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, space) = factory::helpers::create_space_with_owner(db).await?;
    let author = factory::create_user(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(CreateReviewParam {
            user_id: author.id,
            space_id: space.id,
            rating: 5,
            content: "Never crowded before 9am".to_string(),
        })
        .await?;

    assert_eq!(review.rating, 5);
    assert_eq!(
        repo.find_by_user_and_space(author.id, space.id).await?,
        Some(review.clone())
    );
    assert_eq!(repo.find_by_id(review.id).await?, Some(review));

    Ok(())
}

/// Tests deleting a review.
///
/// Expected: Ok(true) first, then Ok(false) once it is gone
#[tokio::test]
async fn deletes_review_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, space) = factory::helpers::create_space_with_owner(db).await?;
    let review = factory::create_review(db, owner.id, space.id).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.delete(review.id).await?);
    assert!(!repo.delete(review.id).await?);

    Ok(())
}
