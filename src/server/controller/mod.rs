//! HTTP request handlers.
//!
//! Controllers extract path ids and bodies, call exactly one service operation and
//! wrap the result in an `ApiResponse` envelope. Validation, authentication and role
//! checks have already run as route middleware by the time a handler is entered.

pub mod auth;
pub mod booking;
pub mod hotel;
pub mod user;
