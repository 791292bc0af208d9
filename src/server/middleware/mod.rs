//! Request middleware.
//!
//! Routes compose these in a fixed order: body validation, then authentication,
//! then role authorization. Each one either passes the request on or fails with an
//! `AppError` that the centralized responder turns into a status code.

pub mod auth;
pub mod roles;
pub mod session;
pub mod validation;

#[cfg(test)]
mod test;
