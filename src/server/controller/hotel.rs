use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        hotel::{CreateHotelDto, HotelDto, UpdateHotelDto},
    },
    server::{
        error::AppError,
        model::hotel::{CreateHotelParam, Hotel, UpdateHotelParam},
        service::hotel::HotelService,
        state::AppState,
    },
};

pub static HOTEL_TAG: &str = "hotel";

#[utoipa::path(
    get,
    path = "/hotel",
    tag = HOTEL_TAG,
    responses(
        (status = 200, description = "All hotels", body = ApiResponse<Vec<HotelDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotels(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let hotels = HotelService::new(&state.db).find_all().await?;

    let dto: Vec<HotelDto> = hotels.into_iter().map(Hotel::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(dto, "findAll"))))
}

#[utoipa::path(
    get,
    path = "/hotel/{id}",
    tag = HOTEL_TAG,
    params(("id" = String, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "The hotel", body = ApiResponse<HotelDto>),
        (status = 409, description = "Hotel doesn't exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = HotelService::new(&state.db).find_by_id(&id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(hotel.into_dto(), "findOne")),
    ))
}

/// Create a hotel. Admin only; the name must be unused.
#[utoipa::path(
    post,
    path = "/hotel",
    tag = HOTEL_TAG,
    request_body = CreateHotelDto,
    responses(
        (status = 201, description = "Hotel created", body = ApiResponse<HotelDto>),
        (status = 400, description = "Invalid hotel data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Forbidden for roles", body = ErrorDto),
        (status = 409, description = "Name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hotel(
    State(state): State<AppState>,
    Json(payload): Json<CreateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = HotelService::new(&state.db)
        .create(CreateHotelParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(hotel.into_dto(), "created")),
    ))
}

/// Partially update a hotel. Admin only.
#[utoipa::path(
    put,
    path = "/hotel/{id}",
    tag = HOTEL_TAG,
    params(("id" = String, Path, description = "Hotel ID")),
    request_body = UpdateHotelDto,
    responses(
        (status = 200, description = "Hotel updated", body = ApiResponse<HotelDto>),
        (status = 400, description = "Invalid hotel data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Forbidden for roles", body = ErrorDto),
        (status = 409, description = "Hotel doesn't exist or name taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = HotelService::new(&state.db)
        .update(&id, UpdateHotelParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(hotel.into_dto(), "updated")),
    ))
}

#[utoipa::path(
    delete,
    path = "/hotel/{id}",
    tag = HOTEL_TAG,
    params(("id" = String, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel deleted", body = ApiResponse<HotelDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Forbidden for roles", body = ErrorDto),
        (status = 409, description = "Hotel doesn't exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = HotelService::new(&state.db).delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(hotel.into_dto(), "deleted")),
    ))
}
