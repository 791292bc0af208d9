use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::{CreateUserDto, LoginDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthUser, session::AuthSession},
        model::user::{CreateUserParam, LoginParam},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the user without logging in; call `/auth/login` afterwards to obtain
/// a session.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Body failed validation
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = AUTH_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid signup data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .signup(CreateUserParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(user.into_dto(), "signup")),
    ))
}

/// Log in with email and password.
///
/// On success the session cookie is set on the response. Its value may also be
/// sent back as `Authorization: Bearer <value>`.
///
/// # Returns
/// - `200 OK` - Logged in
/// - `400 Bad Request` - Body failed validation
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or session store error
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in; session cookie set", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid login data", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&AuthSession::new(&session), LoginParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(user.into_dto(), "login")),
    ))
}

/// End the current session.
///
/// # Returns
/// - `200 OK` - Session deleted; the logged out user is returned
/// - `401 Unauthorized` - No valid session
/// - `500 Internal Server Error` - Session store error
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = ApiResponse<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db)
        .logout(&AuthSession::new(&session))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(user.into_dto(), "logout")),
    ))
}
