//! Wire types shared by every endpoint.
//!
//! DTOs describe exactly what crosses the HTTP boundary. Server-side domain models
//! convert into these at the controller layer.

pub mod api;
pub mod booking;
pub mod hotel;
pub mod user;
