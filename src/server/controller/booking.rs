use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        booking::{BookingDto, CreateBookingDto, UpdateBookingDto},
    },
    server::{
        error::AppError,
        model::booking::{Booking, CreateBookingParam, UpdateBookingParam},
        service::booking::BookingService,
        state::AppState,
    },
};

pub static BOOKING_TAG: &str = "booking";

#[utoipa::path(
    get,
    path = "/booking",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "All bookings", body = ApiResponse<Vec<BookingDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bookings = BookingService::new(&state.db).find_all().await?;

    let dto: Vec<BookingDto> = bookings.into_iter().map(Booking::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(dto, "findAll"))))
}

#[utoipa::path(
    get,
    path = "/booking/{id}",
    tag = BOOKING_TAG,
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "The booking", body = ApiResponse<BookingDto>),
        (status = 409, description = "Booking doesn't exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db).find_by_id(&id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(booking.into_dto(), "findOne")),
    ))
}

#[utoipa::path(
    post,
    path = "/booking",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = ApiResponse<BookingDto>),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Forbidden for roles", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .create(CreateBookingParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(booking.into_dto(), "created")),
    ))
}

#[utoipa::path(
    put,
    path = "/booking/{id}",
    tag = BOOKING_TAG,
    params(("id" = String, Path, description = "Booking ID")),
    request_body = UpdateBookingDto,
    responses(
        (status = 200, description = "Booking updated", body = ApiResponse<BookingDto>),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Forbidden for roles", body = ErrorDto),
        (status = 409, description = "Booking doesn't exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .update(&id, UpdateBookingParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(booking.into_dto(), "updated")),
    ))
}

#[utoipa::path(
    delete,
    path = "/booking/{id}",
    tag = BOOKING_TAG,
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking deleted", body = ApiResponse<BookingDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Forbidden for roles", body = ErrorDto),
        (status = 409, description = "Booking doesn't exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db).delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(booking.into_dto(), "deleted")),
    ))
}
