use super::*;

/// Tests a partial update that changes only the capacity.
///
/// Verifies that fields absent from the update keep their stored values.
///
/// Expected: Ok(Some) with new capacity and unchanged name, address and description
#[tokio::test]
async fn keeps_unspecified_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_space_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let stored = factory::space::SpaceFactory::new(db, owner.id)
        .name("Gym")
        .address("5 Fit St")
        .capacity(40)
        .description("Open 24/7")
        .build()
        .await?;

    let repo = SpaceRepository::new(db);
    let updated = repo
        .update(
            stored.id,
            UpdateSpaceParam {
                capacity: Some(60),
                ..Default::default()
            },
        )
        .await?
        .expect("space should exist");

    assert_eq!(updated.capacity, 60);
    assert_eq!(updated.name, "Gym");
    assert_eq!(updated.address, "5 Fit St");
    assert_eq!(updated.description.as_deref(), Some("Open 24/7"));
    assert!(updated.updated_at >= stored.updated_at);

    Ok(())
}

/// Tests updating a space that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_space() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_space_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpaceRepository::new(db);
    let result = repo
        .update(
            77,
            UpdateSpaceParam {
                name: Some("Nowhere".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
