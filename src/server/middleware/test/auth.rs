use super::*;

/// Tests a session holding an existing user's id.
///
/// Expected: Ok(User) matching the stored row
#[tokio::test]
async fn resolves_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let stored = factory::user::create_admin(db).await?;
    AuthSession::new(session).set_user_id(stored.id).await?;

    let user = AuthGuard::new(db, session).require().await?;

    assert_eq!(user.id, stored.id);
    assert_eq!(user.email, stored.email);
    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests a session with no user id.
///
/// Expected: Err(AuthError::NotAuthenticated)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotAuthenticated))
    ));

    Ok(())
}

/// Tests a session pointing at a user that has since been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase) with the stale id
#[tokio::test]
async fn rejects_session_of_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}

/// Tests the session wrapper's lifecycle.
///
/// Expected: the id is readable after login and gone after `end`
#[tokio::test]
async fn session_stores_and_clears_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(17).await?;
    assert_eq!(auth_session.get_user_id().await?, Some(17));

    auth_session.end().await?;
    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}
