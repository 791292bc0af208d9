use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct HotelDto {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: String,
    pub picture_list: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateHotelDto {
    pub name: String,
    pub location: String,
    pub description: String,
    pub picture_list: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateHotelDto {
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub picture_list: Option<String>,
}
