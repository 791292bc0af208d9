//! Hotel domain models, parameters and payload schemas.

use crate::{
    model::hotel::{CreateHotelDto, HotelDto, UpdateHotelDto},
    server::middleware::validation::{BodySchema, FieldKind, FieldRule},
};

const HOTEL_FIELDS: &[FieldRule] = &[
    FieldRule::new("name", FieldKind::String),
    FieldRule::new("location", FieldKind::String),
    FieldRule::new("description", FieldKind::String),
    FieldRule::new("picture_list", FieldKind::String),
];

pub const CREATE_HOTEL_SCHEMA: BodySchema = BodySchema::new(HOTEL_FIELDS);

pub const UPDATE_HOTEL_SCHEMA: BodySchema = CREATE_HOTEL_SCHEMA.partial();

/// A hotel. `name` is unique across all hotels.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: String,
    pub picture_list: String,
}

impl Hotel {
    pub fn into_dto(self) -> HotelDto {
        HotelDto {
            id: self.id,
            name: self.name,
            location: self.location,
            description: self.description,
            picture_list: self.picture_list,
        }
    }

    pub fn from_entity(entity: entity::hotel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            location: entity.location,
            description: entity.description,
            picture_list: entity.picture_list,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateHotelParam {
    pub name: String,
    pub location: String,
    pub description: String,
    pub picture_list: String,
}

impl CreateHotelParam {
    pub fn from_dto(dto: CreateHotelDto) -> Self {
        Self {
            name: dto.name,
            location: dto.location,
            description: dto.description,
            picture_list: dto.picture_list,
        }
    }
}

/// Partial hotel update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateHotelParam {
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub picture_list: Option<String>,
}

impl UpdateHotelParam {
    pub fn from_dto(dto: UpdateHotelDto) -> Self {
        Self {
            name: dto.name,
            location: dto.location,
            description: dto.description,
            picture_list: dto.picture_list,
        }
    }
}
