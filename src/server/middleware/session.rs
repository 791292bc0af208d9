//! Type-safe session management.
//!
//! `AuthSession` wraps the tower-sessions `Session` and exposes only the operations
//! authentication needs, keeping the session key in one place.
//!
//! The session id travels in the signed `Authorization` cookie. Clients that cannot
//! keep cookies may echo the cookie value as `Authorization: Bearer <value>` instead;
//! `bearer_to_session_cookie` rewrites such requests before the session layer sees them.

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use tower_sessions::{cookie::Cookie, Session};

use crate::server::error::AppError;

/// Name of the cookie carrying the signed session id.
pub const SESSION_COOKIE: &str = "Authorization";

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles storing and retrieving the authenticated user's id and the session
/// lifecycle operations used by login and logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Starts an authenticated session for the user.
    ///
    /// The session id is cycled first so an id issued before login cannot be
    /// reused to ride the authenticated session.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored under a fresh session id
    /// - `Err(AppError::SessionErr(_))` - Failed to write to the session store
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the authenticated user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Clears the session and deletes it from the store.
    ///
    /// The client's cookie is expired by the session layer on the response.
    pub async fn end(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// Translates `Authorization: Bearer <token>` into the session cookie.
///
/// Must be layered outside the session layer. A request that already carries the
/// session cookie is passed through untouched.
pub async fn bearer_to_session_cookie(mut req: Request, next: Next) -> Response {
    if has_session_cookie(&req) {
        return next.run(req).await;
    }

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_string);

    if let Some(token) = token.filter(|token| !token.is_empty()) {
        let cookie = Cookie::new(SESSION_COOKIE, token).to_string();
        let merged = match req
            .headers()
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
        {
            Some(existing) => format!("{existing}; {cookie}"),
            None => cookie,
        };

        if let Ok(value) = HeaderValue::from_str(&merged) {
            req.headers_mut().insert(header::COOKIE, value);
        }
    }

    next.run(req).await
}

/// Extracts the token of a `Bearer` credential; the scheme name is case-insensitive.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim_start().split_once(' ')?;

    scheme
        .eq_ignore_ascii_case("bearer")
        .then(|| token.trim())
}

fn has_session_cookie(req: &Request) -> bool {
    req.headers()
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value.to_string()))
        .filter_map(Result::ok)
        .any(|cookie| cookie.name() == SESSION_COOKIE)
}
