use super::*;

/// Tests promoting a user to OWNER.
///
/// Expected: Ok(Some) with the new role persisted
#[tokio::test]
async fn replaces_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_role(stored.id, Role::Owner).await?.unwrap();
    assert_eq!(updated.role, Role::Owner);

    let reloaded = repo.find_by_id(stored.id).await?.unwrap();
    assert_eq!(reloaded.role, Role::Owner);

    Ok(())
}

/// Tests changing the role of a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.set_role(42, Role::Admin).await?.is_none());

    Ok(())
}
