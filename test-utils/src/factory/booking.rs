//! Booking factory for creating test booking entities.

use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// The referenced user and hotel ids are not checked; use
/// `helpers::create_booking_with_dependencies` when real rows are needed.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    hotel_id: String,
    date: DateTime<Utc>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - user_id: `"1"`
    /// - hotel_id: `"1"`
    /// - date: `2026-06-01T12:00:00Z`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: "1".to_string(),
            hotel_id: "1".to_string(),
            date: Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn hotel_id(mut self, hotel_id: impl Into<String>) -> Self {
        self.hotel_id = hotel_id.into();
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            hotel_id: ActiveValue::Set(self.hotel_id),
            date: ActiveValue::Set(self.date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with default values.
pub async fn create_booking(db: &DatabaseConnection) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db).build().await
}
