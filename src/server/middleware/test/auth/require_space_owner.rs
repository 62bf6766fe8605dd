use super::*;

/// Tests that the owner of a space passes the ownership check.
///
/// Expected: Ok((User, Space))
#[tokio::test]
async fn allows_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_space_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let (owner, space) = factory::helpers::create_space_with_owner(db).await?;
    let headers = headers_for(&tokens, owner.clone());

    let (user, found) = AuthGuard::new(db, &tokens, &headers)
        .require_space_owner(space.id)
        .await?;

    assert_eq!(user.id, owner.id);
    assert_eq!(found.id, space.id);

    Ok(())
}

/// Tests that another OWNER cannot modify the space.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_other_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_space_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let (_, space) = factory::helpers::create_space_with_owner(db).await?;
    let other_owner = factory::create_owner(db).await?;
    let headers = headers_for(&tokens, other_owner);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require_space_owner(space.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that an ADMIN may modify any space.
///
/// Expected: Ok((User, Space))
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_space_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let (_, space) = factory::helpers::create_space_with_owner(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let headers = headers_for(&tokens, admin);

    assert!(AuthGuard::new(db, &tokens, &headers)
        .require_space_owner(space.id)
        .await
        .is_ok());

    Ok(())
}

/// Tests the ownership check on a missing space.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_space_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_space_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let admin = factory::user::create_admin(db).await?;
    let headers = headers_for(&tokens, admin);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require_space_owner(77)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
