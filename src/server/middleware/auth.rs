use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::user::{Role, UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::User,
        state::AppState,
    },
};

/// Identity of the authenticated caller, attached to request extensions by
/// `require_auth` for the roles middleware and controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i32,
    pub email: String,
    pub role: Role,
}

impl AuthUser {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            role: self.role,
        }
    }
}

impl From<User> for AuthUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
        }
    }
}

/// Resolves the session to a user record.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires an authenticated session whose user still exists.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::NotAuthenticated)` - No user id in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session points at a deleted user
    pub async fn require(&self) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}

/// Rejects requests without a valid session and attaches `AuthUser` otherwise.
pub async fn require_auth(
    State(state): State<AppState>,
    session: Session,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    req.extensions_mut().insert(AuthUser::from(user));

    Ok(next.run(req).await)
}
