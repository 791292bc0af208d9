//! Booking service for business logic.
//!
//! This module provides the `BookingService`. Bookings have no uniqueness rule, so
//! the service only parses path ids and maps missing bookings to 409 responses.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::booking::BookingRepository,
    error::AppError,
    model::booking::{Booking, CreateBookingParam, UpdateBookingParam},
    util::parse::parse_record_id,
};

fn booking_missing() -> AppError {
    AppError::Conflict("Booking doesn't exist".to_string())
}

/// Booking operations. Bookings carry no uniqueness rule and their user and hotel
/// references are not checked.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new BookingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every booking.
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - All bookings ordered by id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_all(&self) -> Result<Vec<Booking>, AppError> {
        Ok(BookingRepository::new(self.db).get_all().await?)
    }

    /// Retrieves a booking by path id.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Booking found
    /// - `Err(AppError::Conflict)` - No such booking, or the id is malformed
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Booking, AppError> {
        let id = parse_record_id(id).ok_or_else(booking_missing)?;

        BookingRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(booking_missing)
    }

    /// Stores a booking. The user and hotel ids are kept as given.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateBookingParam) -> Result<Booking, AppError> {
        let booking = BookingRepository::new(self.db).create(param).await?;

        tracing::debug!(
            "Created booking {} of hotel {} for user {}",
            booking.id,
            booking.hotel_id,
            booking.user_id
        );

        Ok(booking)
    }

    /// Applies a partial update to a booking.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The updated booking
    /// - `Err(AppError::Conflict)` - No such booking
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: &str, param: UpdateBookingParam) -> Result<Booking, AppError> {
        let id = parse_record_id(id).ok_or_else(booking_missing)?;

        BookingRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(booking_missing)
    }

    /// Deletes a booking and returns it as it was.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The deleted booking
    /// - `Err(AppError::Conflict)` - No such booking
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<Booking, AppError> {
        let id = parse_record_id(id).ok_or_else(booking_missing)?;

        BookingRepository::new(self.db)
            .delete(id)
            .await?
            .ok_or_else(booking_missing)
    }
}
