use super::*;

/// Tests that an authenticated user passes an empty permission list.
///
/// Expected: Ok(User) matching the token subject
#[tokio::test]
async fn allows_any_authenticated_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let stored = factory::create_user(db).await?;
    let headers = headers_for(&tokens, stored.clone());

    let user = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    assert_eq!(user.id, stored.id);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests that a USER cannot create spaces.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_missing_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let stored = factory::create_user(db).await?;
    let headers = headers_for(&tokens, stored);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::CreateSpace])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that the stored role wins over the role in the token.
///
/// Verifies that a user promoted after login gains the permission without
/// logging in again.
///
/// Expected: Ok(User) with OWNER role
#[tokio::test]
async fn uses_current_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let stored = factory::create_user(db).await?;
    let headers = headers_for(&tokens, stored.clone());

    crate::server::data::user::UserRepository::new(db)
        .set_role(stored.id, crate::model::user::Role::Owner)
        .await?;

    let user = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::CreateSpace])
        .await?;

    assert_eq!(user.role, crate::model::user::Role::Owner);

    Ok(())
}

/// Tests a valid token whose user has been removed.
///
/// Expected: Err(UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let stored = factory::create_user(db).await?;
    let headers = headers_for(&tokens, stored.clone());
    crate::server::data::user::UserRepository::new(db)
        .delete(stored.id)
        .await?;

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}

/// Tests a correctly signed access token past its expiry.
///
/// Expected: Err(TokenExpired), answered as 401 UNAUTHORIZED
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let stored = factory::create_user(db).await?;
    let headers = headers_for(&expired_tokens(), stored);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Authenticated])
        .await;

    let Err(err) = result else {
        panic!("expired token was accepted");
    };
    assert!(matches!(err, AppError::AuthErr(AuthError::TokenExpired)));

    let response = axum::response::IntoResponse::into_response(err);
    assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);

    Ok(())
}
