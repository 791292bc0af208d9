//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, a hotel and a booking of that hotel by that user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, hotel, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::hotel::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let hotel = crate::factory::hotel::create_hotel(db).await?;
    let booking = crate::factory::booking::BookingFactory::new(db)
        .user_id(user.id.to_string())
        .hotel_id(hotel.id.to_string())
        .build()
        .await?;

    Ok((user, hotel, booking))
}
