use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{AuthGuard, AuthUser},
            roles::RoleRule,
            session::AuthSession,
            validation::validate,
        },
        model::{
            booking::{CREATE_BOOKING_SCHEMA, UPDATE_BOOKING_SCHEMA},
            hotel::CREATE_HOTEL_SCHEMA,
            user::{CREATE_USER_SCHEMA, LOGIN_SCHEMA, UPDATE_USER_SCHEMA},
        },
    },
};

mod auth;
mod validation;

fn validation_message(result: Result<serde_json::Map<String, serde_json::Value>, AppError>) -> String {
    match result {
        Err(AppError::Validation(message)) => message,
        other => panic!("expected a validation error, got {other:?}"),
    }
}
