use chrono::{TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::{
            booking::{CreateBookingParam, UpdateBookingParam},
            hotel::{CreateHotelParam, UpdateHotelParam},
            user::{CreateUserParam, LoginParam, UpdateUserParam},
        },
        service::{
            auth::AuthService, booking::BookingService, hotel::HotelService, user::UserService,
        },
    },
};

mod auth;

fn assert_conflict<T: std::fmt::Debug>(result: Result<T, AppError>, expected: &str) {
    match result {
        Err(AppError::Conflict(message)) => assert_eq!(message, expected),
        other => panic!("expected Conflict({expected:?}), got {other:?}"),
    }
}
