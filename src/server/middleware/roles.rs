use axum::{
    extract::{RawPathParams, Request, State},
    middleware::Next,
    response::Response,
    RequestPartsExt,
};

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::AuthUser,
        util::parse::parse_record_id,
    },
};

/// Authorization rule for a route: the roles allowed through, and whether a user
/// may also act on the record whose `id` route parameter is their own id.
#[derive(Debug, Clone, Copy)]
pub struct RoleRule {
    permitted: &'static [Role],
    allow_self: bool,
}

impl RoleRule {
    pub const fn new(permitted: &'static [Role]) -> Self {
        Self {
            permitted,
            allow_self: false,
        }
    }

    /// Also admits a user whose id equals the `id` route parameter.
    pub const fn or_self(self) -> Self {
        Self {
            allow_self: true,
            ..self
        }
    }

    pub fn allows(&self, user: &AuthUser, target_id: Option<&str>) -> bool {
        if self.permitted.contains(&user.role) {
            return true;
        }

        self.allow_self && target_id.and_then(parse_record_id) == Some(user.id)
    }
}

/// Enforces a `RoleRule` on a request already authenticated by `require_auth`.
pub async fn require_roles(
    State(rule): State<RoleRule>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    // Layered without `require_auth` in front of it; treat as unauthenticated.
    let Some(user) = parts.extensions.get::<AuthUser>().cloned() else {
        return Err(AuthError::NotAuthenticated.into());
    };

    let target_id = parts.extract::<RawPathParams>().await.ok().and_then(|params| {
        params
            .iter()
            .find(|(key, _)| *key == "id")
            .map(|(_, value)| value.to_string())
    });

    if !rule.allows(&user, target_id.as_deref()) {
        return Err(AuthError::AccessDenied(
            user.id,
            format!(
                "role {} is not permitted on {}",
                user.role.as_str(),
                parts.uri.path()
            ),
        )
        .into());
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}
