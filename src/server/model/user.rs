//! User domain models, parameters and payload schemas.

use sea_orm::DbErr;

use crate::{
    model::user::{CreateUserDto, LoginDto, Role, UpdateUserDto, UserDto},
    server::middleware::validation::{BodySchema, FieldKind, FieldRule},
};

/// Validation schema for signup and `POST /users`.
pub const CREATE_USER_SCHEMA: BodySchema = BodySchema::new(USER_FIELDS);

/// Validation schema for `PUT /users/{id}`. Email and role are stripped.
pub const UPDATE_USER_SCHEMA: BodySchema = BodySchema::new(UPDATE_USER_FIELDS).partial();

/// Validation schema for login.
pub const LOGIN_SCHEMA: BodySchema = BodySchema::new(LOGIN_FIELDS);

const USER_FIELDS: &[FieldRule] = &[
    FieldRule::new("email", FieldKind::Email),
    FieldRule::new("password", FieldKind::String).length(9, 32),
    FieldRule::new("role", FieldKind::Role),
];

const UPDATE_USER_FIELDS: &[FieldRule] =
    &[FieldRule::new("password", FieldKind::String).length(9, 32)];

const LOGIN_FIELDS: &[FieldRule] = &[
    FieldRule::new("email", FieldKind::Email),
    FieldRule::new("password", FieldKind::String).length(9, 32),
];

/// A registered user.
///
/// `password_hash` stays on the server: `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            role: self.role,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user
    /// - `Err(DbErr::Custom)` - The stored role is not a known role name
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = Role::parse(&entity.role).ok_or_else(|| {
            DbErr::Custom(format!(
                "Invalid role '{}' stored for user {}",
                entity.role, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password,
            role,
        })
    }
}

/// Parameters for creating a user. Carries the plaintext password until the
/// service hashes it.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl CreateUserParam {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            role: dto.role,
        }
    }
}

/// Parameters for a user update. `None` leaves the password untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub password: Option<String>,
}

impl UpdateUserParam {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            password: dto.password,
        }
    }
}

/// Row values written by the repository; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Row changes written by the repository.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}
