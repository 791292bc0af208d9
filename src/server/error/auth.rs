use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the request's session.
    ///
    /// Either no session cookie or bearer token was sent, or it did not resolve to a
    /// live session. Results in a 401 Unauthorized response.
    #[error("Request carries no authenticated session")]
    NotAuthenticated,

    /// The session points at a user that has since been deleted.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session was not found in database")]
    UserNotInDatabase(i32),

    /// Login attempted with an unknown email or a wrong password.
    ///
    /// Both cases share one message so the response does not reveal which
    /// emails are registered. Results in a 401 Unauthorized response.
    #[error("Login failed due to invalid credentials")]
    InvalidCredentials,

    /// Authenticated user lacks the role required by the route.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `NotAuthenticated` / `UserNotInDatabase` → 401 "Wrong authentication token"
/// - `InvalidCredentials` → 401 "Invalid email or password"
/// - `AccessDenied` → 403 "Forbidden for roles"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::NotAuthenticated | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Wrong authentication token")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Forbidden for roles"),
        };

        (
            status,
            Json(ErrorDto {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}
