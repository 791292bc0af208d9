//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: HTTP endpoints for users, hotels and
//! bookings, their business rules, data access, and the session-based
//! authentication in front of them. The backend uses Axum as the web framework,
//! SeaORM over SQLite for persistence and tower-sessions for server-side sessions.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Existence, uniqueness and credential rules
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models, parameters and payload schemas
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Validation, authentication, roles and sessions
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database connection, migrations and the session layer
//! - **Router** (`router`) - Route tables, middleware chains and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** matches the route; a bearer token is turned into the session cookie
//! 2. **Middleware** validates the body, resolves the session user, checks roles
//! 3. **Controller** converts the DTO to params and calls one service operation
//! 4. **Service** applies business rules and calls the repository
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** wraps the domain model's DTO in an `ApiResponse`
//!
//! Any failure along the way is an `AppError`, rendered as `{ "message": ... }`.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
mod test;
