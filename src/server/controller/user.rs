use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        model::user::{CreateUserParam, UpdateUserParam, User},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List every user.
///
/// # Returns
/// - `200 OK` - All users, without password hashes
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = ApiResponse<Vec<UserDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).find_all().await?;

    let dto: Vec<UserDto> = users.into_iter().map(User::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(dto, "findAll"))))
}

/// Get one user.
///
/// # Access Control
/// - `ADMIN` - Any user
/// - Self - A user may read their own record
///
/// # Returns
/// - `200 OK` - The user
/// - `401 Unauthorized` - No valid session
/// - `403 Forbidden` - Neither admin nor the user themselves
/// - `409 Conflict` - No such user
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = ApiResponse<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Forbidden for roles", body = ErrorDto),
        (status = 409, description = "User doesn't exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).find_by_id(&id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(user.into_dto(), "findOne")),
    ))
}

/// Create a user with an explicit role.
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Body failed validation
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .create(CreateUserParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(user.into_dto(), "created")),
    ))
}

/// Change a user's password. Email and role cannot be changed.
///
/// # Access Control
/// - `ADMIN` - Any user
/// - Self - A user may update their own record
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Body failed validation
/// - `401 Unauthorized` - No valid session
/// - `403 Forbidden` - Neither admin nor the user themselves
/// - `409 Conflict` - No such user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Forbidden for roles", body = ErrorDto),
        (status = 409, description = "User doesn't exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .update(&id, UpdateUserParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(user.into_dto(), "updated")),
    ))
}

/// Delete a user.
///
/// # Access Control
/// - `ADMIN` - Any user
/// - Self - A user may delete their own record
///
/// # Returns
/// - `200 OK` - The deleted user
/// - `401 Unauthorized` - No valid session
/// - `403 Forbidden` - Neither admin nor the user themselves
/// - `409 Conflict` - No such user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = ApiResponse<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Forbidden for roles", body = ErrorDto),
        (status = 409, description = "User doesn't exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(user.into_dto(), "deleted")),
    ))
}
