//! Hotel service for business logic.
//!
//! This module provides the `HotelService` for the hotel catalogue. It enforces
//! globally unique hotel names and turns missing hotels into 409 responses.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::hotel::HotelRepository,
    error::AppError,
    model::hotel::{CreateHotelParam, Hotel, UpdateHotelParam},
    service::unique_violation,
    util::parse::parse_record_id,
};

fn hotel_missing() -> AppError {
    AppError::Conflict("Hotel doesn't exist".to_string())
}

fn name_taken(name: &str) -> AppError {
    AppError::Conflict(format!("This name {name} already exists"))
}

/// Service providing business logic for hotel management.
pub struct HotelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelService<'a> {
    /// Creates a new HotelService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every hotel.
    ///
    /// # Returns
    /// - `Ok(Vec<Hotel>)` - All hotels ordered by id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_all(&self) -> Result<Vec<Hotel>, AppError> {
        Ok(HotelRepository::new(self.db).get_all().await?)
    }

    /// Retrieves a hotel by path id.
    ///
    /// # Arguments
    /// - `id` - Record id as it appears in the path
    ///
    /// # Returns
    /// - `Ok(Hotel)` - Hotel found
    /// - `Err(AppError::Conflict)` - No such hotel, or the id is malformed
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Hotel, AppError> {
        let id = parse_record_id(id).ok_or_else(hotel_missing)?;

        HotelRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(hotel_missing)
    }

    /// Creates a hotel unless another hotel already has its name.
    ///
    /// # Returns
    /// - `Ok(Hotel)` - The created hotel
    /// - `Err(AppError::Conflict)` - Name already taken
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateHotelParam) -> Result<Hotel, AppError> {
        let repo = HotelRepository::new(self.db);

        if repo.find_by_name(&param.name).await?.is_some() {
            return Err(name_taken(&param.name));
        }

        let name = param.name.clone();
        let hotel = repo
            .create(param)
            .await
            .map_err(|e| unique_violation(e, || format!("This name {name} already exists")))?;

        tracing::debug!("Created hotel {} ({})", hotel.id, hotel.name);

        Ok(hotel)
    }

    /// Applies a partial update. A new name must not belong to a different hotel;
    /// keeping the hotel's own name is fine.
    ///
    /// # Returns
    /// - `Ok(Hotel)` - The updated hotel
    /// - `Err(AppError::Conflict)` - No such hotel, or name taken by another hotel
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: &str, param: UpdateHotelParam) -> Result<Hotel, AppError> {
        let id = parse_record_id(id).ok_or_else(hotel_missing)?;
        let repo = HotelRepository::new(self.db);

        if let Some(name) = param.name.as_deref() {
            if let Some(existing) = repo.find_by_name(name).await? {
                if existing.id != id {
                    return Err(name_taken(name));
                }
            }
        }

        let name = param.name.clone().unwrap_or_default();
        repo.update(id, param)
            .await
            .map_err(|e| unique_violation(e, || format!("This name {name} already exists")))?
            .ok_or_else(hotel_missing)
    }

    /// Deletes a hotel and returns it as it was.
    ///
    /// # Returns
    /// - `Ok(Hotel)` - The deleted hotel
    /// - `Err(AppError::Conflict)` - No such hotel
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<Hotel, AppError> {
        let id = parse_record_id(id).ok_or_else(hotel_missing)?;

        HotelRepository::new(self.db)
            .delete(id)
            .await?
            .ok_or_else(hotel_missing)
    }
}
