use super::*;

fn signup_param() -> CreateUserParam {
    CreateUserParam {
        email: "login@example.com".to_string(),
        password: "correct-horse".to_string(),
        role: Role::User,
    }
}

fn login_param(email: &str, password: &str) -> LoginParam {
    LoginParam {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Tests a successful login stores the user id in the session.
///
/// Expected: Ok with the user, session carries its id
#[tokio::test]
async fn login_stores_user_in_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let service = AuthService::new(db);
    let user = service.signup(signup_param()).await?;

    let auth_session = AuthSession::new(session);
    assert_eq!(auth_session.get_user_id().await?, None);

    let logged_in = service
        .login(&auth_session, login_param("login@example.com", "correct-horse"))
        .await?;

    assert_eq!(logged_in.id, user.id);
    assert_eq!(auth_session.get_user_id().await?, Some(user.id));

    Ok(())
}

/// Tests a wrong password and an unknown email fail the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) for both, session left empty
#[tokio::test]
async fn login_rejects_bad_credentials() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let service = AuthService::new(db);
    service.signup(signup_param()).await?;
    let auth_session = AuthSession::new(session);

    let wrong_password = service
        .login(&auth_session, login_param("login@example.com", "wrong-horse"))
        .await;
    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let unknown_email = service
        .login(&auth_session, login_param("nobody@example.com", "correct-horse"))
        .await;
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}

/// Tests signup follows the user creation rules.
///
/// Expected: Err(Conflict) for an email already registered
#[tokio::test]
async fn signup_rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service.signup(signup_param()).await?;

    assert_conflict(
        service.signup(signup_param()).await,
        "This email login@example.com already exists",
    );

    Ok(())
}

/// Tests logout clears the authenticated user from the session.
///
/// Expected: Ok, and the session no longer carries a user id
#[tokio::test]
async fn logout_clears_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let service = AuthService::new(db);
    service.signup(signup_param()).await?;
    let auth_session = AuthSession::new(session);

    service
        .login(&auth_session, login_param("login@example.com", "correct-horse"))
        .await?;
    service.logout(&auth_session).await?;

    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}
