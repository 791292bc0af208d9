//! SeaORM entities for the hotel booking schema.
//!
//! One module per table. The schema itself is owned by the `migration` crate; these
//! definitions must be kept in sync with it.

pub mod prelude;

pub mod booking;
pub mod hotel;
pub mod user;
