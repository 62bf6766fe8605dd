use super::*;

/// Tests listing spaces across pages.
///
/// Expected: Ok with pages ordered by id and total count of all spaces
#[tokio::test]
async fn returns_spaces_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_space_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(factory::create_space(db, owner.id).await?.id);
    }

    let repo = SpaceRepository::new(db);

    let (first, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(
        first.iter().map(|s| s.id).collect::<Vec<_>>(),
        ids[..2].to_vec()
    );

    let (second, _) = repo.get_all_paginated(1, 2).await?;
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].id, ids[2]);

    Ok(())
}
