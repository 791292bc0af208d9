//! Signup, login and logout.
//!
//! Credentials are checked against the stored Argon2 hash. A successful login stores
//! the user id in the session under a freshly cycled session id; logout deletes the
//! session from the store.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{CreateUserParam, LoginParam, User},
    service::user::UserService,
    util::password::verify_password,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user under the same rules as `UserService::create`. Does not log
    /// the new user in.
    pub async fn signup(&self, param: CreateUserParam) -> Result<User, AppError> {
        UserService::new(self.db).create(param).await
    }

    /// Checks credentials and starts an authenticated session.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials matched; the session now carries the user id
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AppError::SessionErr)` - Session store failure
    pub async fn login(&self, session: &AuthSession<'_>, param: LoginParam) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&param.email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(param.password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        session.set_user_id(user.id).await?;

        tracing::debug!("User {} logged in", user.id);

        Ok(user)
    }

    /// Ends the session: its data is cleared and the record deleted from the store.
    pub async fn logout(&self, session: &AuthSession<'_>) -> Result<(), AppError> {
        session.end().await
    }
}
