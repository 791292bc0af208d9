//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Each module also declares the
//! validation schemas for the payloads that create or update its resource.

pub mod booking;
pub mod hotel;
pub mod user;
