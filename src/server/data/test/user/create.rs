use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores the email, name and role and
/// returns the domain model with a generated id.
///
/// Expected: Ok with user created with role USER
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_param("alice@example.com")).await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.name, "Alice");
    assert_eq!(user.role, Role::User);
    assert_eq!(user.created_at, user.updated_at);

    Ok(())
}

/// Tests that a duplicate email is rejected by the database.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("dup@example.com")).await?;
    let result = repo.create(create_param("dup@example.com")).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert!(repo.email_exists("dup@example.com").await?);

    Ok(())
}
