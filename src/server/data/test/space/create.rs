use super::*;

/// Tests creating a space for an owner.
///
/// Expected: Ok with all fields stored and timestamps set
#[tokio::test]
async fn creates_space() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_space_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;

    let repo = SpaceRepository::new(db);
    let space = repo
        .create(CreateSpaceParam {
            owner_id: owner.id,
            name: "Central Library".to_string(),
            address: "1 Library Way".to_string(),
            capacity: 250,
            description: Some("Quiet floors 2-4".to_string()),
        })
        .await?;

    assert_eq!(space.owner_id, owner.id);
    assert_eq!(space.name, "Central Library");
    assert_eq!(space.capacity, 250);
    assert_eq!(space.description.as_deref(), Some("Quiet floors 2-4"));

    let found = repo.find_by_id(space.id).await?;
    assert_eq!(found, Some(space));

    Ok(())
}
