//! Booking domain models, parameters and payload schemas.

use chrono::{DateTime, Utc};

use crate::{
    model::booking::{BookingDto, CreateBookingDto, UpdateBookingDto},
    server::middleware::validation::{BodySchema, FieldKind, FieldRule},
};

const BOOKING_FIELDS: &[FieldRule] = &[
    FieldRule::new("userId", FieldKind::String),
    FieldRule::new("hotelId", FieldKind::String),
    FieldRule::new("date", FieldKind::DateTime),
];

pub const CREATE_BOOKING_SCHEMA: BodySchema = BodySchema::new(BOOKING_FIELDS);

pub const UPDATE_BOOKING_SCHEMA: BodySchema = CREATE_BOOKING_SCHEMA.partial();

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: String,
    pub hotel_id: String,
    pub date: DateTime<Utc>,
}

impl Booking {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            user_id: self.user_id,
            hotel_id: self.hotel_id,
            date: self.date,
        }
    }

    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            hotel_id: entity.hotel_id,
            date: entity.date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBookingParam {
    pub user_id: String,
    pub hotel_id: String,
    pub date: DateTime<Utc>,
}

impl CreateBookingParam {
    pub fn from_dto(dto: CreateBookingDto) -> Self {
        Self {
            user_id: dto.user_id,
            hotel_id: dto.hotel_id,
            date: dto.date,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBookingParam {
    pub user_id: Option<String>,
    pub hotel_id: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl UpdateBookingParam {
    pub fn from_dto(dto: UpdateBookingDto) -> Self {
        Self {
            user_id: dto.user_id,
            hotel_id: dto.hotel_id,
            date: dto.date,
        }
    }
}
