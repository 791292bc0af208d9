//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let hotel = factory::hotel::create_hotel(&db).await?;
//!
//!     // Create a booking together with the user and hotel it points at
//!     let (user, hotel, booking) = factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .role("ADMIN")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `hotel` - Create hotel entities
//! - `booking` - Create booking entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod booking;
pub mod helpers;
pub mod hotel;
pub mod user;

pub use booking::create_booking;
pub use hotel::create_hotel;
pub use user::create_user;
