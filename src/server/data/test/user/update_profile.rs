use super::*;

/// Tests updating only the name.
///
/// Verifies that the password hash is left untouched when not provided.
///
/// Expected: Ok(Some) with new name and unchanged hash
#[tokio::test]
async fn updates_name_and_keeps_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .email("carol@example.com")
        .password_hash("original-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .update_profile(stored.id, Some("Carol".to_string()), None)
        .await?
        .expect("user should exist");

    assert_eq!(user.name, "Carol");
    assert!(user.updated_at >= stored.updated_at);

    let credentials = repo
        .find_credentials_by_email("carol@example.com")
        .await?
        .unwrap();
    assert_eq!(credentials.password_hash, "original-hash");

    Ok(())
}

/// Tests updating a user that does not exist.
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
    let result = repo
        .update_profile(999, Some("Ghost".to_string()), None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
