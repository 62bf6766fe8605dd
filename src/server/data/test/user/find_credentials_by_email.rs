use super::*;

/// Tests looking up credentials for an existing email.
///
/// Expected: Ok(Some) carrying the stored password hash
#[tokio::test]
async fn returns_credentials_for_known_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .email("bob@example.com")
        .password_hash("$argon2id$stored")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo
        .find_credentials_by_email("bob@example.com")
        .await?
        .expect("user should exist");

    assert_eq!(credentials.user.id, stored.id);
    assert_eq!(credentials.password_hash, "$argon2id$stored");

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_email("nobody@example.com").await?;

    assert!(credentials.is_none());

    Ok(())
}

/// Tests that a row with an unknown role cannot be read as a user.
///
/// Expected: Err(InternalErr) instead of silently defaulting the role
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("weird@example.com")
        .role("SUPERUSER")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_credentials_by_email("weird@example.com").await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
