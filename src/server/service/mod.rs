//! Business logic layer.
//!
//! Services sit between controllers and repositories. They turn path ids into record
//! ids, enforce existence and uniqueness rules, hash passwords, and report failures
//! as `AppError` values. Each service borrows the connection and is constructed per
//! request.

pub mod auth;
pub mod booking;
pub mod hotel;
pub mod user;

use sea_orm::{DbErr, SqlErr};

use crate::server::error::AppError;

/// Maps a unique constraint violation to a 409 with `message`; other database
/// errors pass through unchanged.
///
/// Covers the window between a service's uniqueness check and the write.
fn unique_violation(err: DbErr, message: impl FnOnce() -> String) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(message()),
        _ => err.into(),
    }
}

#[cfg(test)]
mod test;
