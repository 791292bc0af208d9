//! User service for business logic.
//!
//! This module provides the `UserService` for user management. It owns the rules the
//! repository does not: email uniqueness on registration, password hashing before storage, and the
//! 409 responses for missing users.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, NewUser, UpdateUserParam, User, UserChanges},
    service::unique_violation,
    util::{parse::parse_record_id, password::hash_password},
};

fn user_missing() -> AppError {
    AppError::Conflict("User doesn't exist".to_string())
}

fn email_taken(email: &str) -> AppError {
    AppError::Conflict(format!("This email {email} already exists"))
}

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users ordered by id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Retrieves a user by path id.
    ///
    /// # Arguments
    /// - `id` - Record id as it appears in the path
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::Conflict)` - No such user, or the id is malformed
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<User, AppError> {
        let id = parse_record_id(id).ok_or_else(user_missing)?;

        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(user_missing)
    }

    /// Registers a user, storing an Argon2 hash of the password.
    ///
    /// # Arguments
    /// - `param` - Email, plaintext password and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::PasswordErr)` - Hashing failed
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&param.email).await?.is_some() {
            return Err(email_taken(&param.email));
        }

        let password_hash = hash_password(param.password).await?;
        let email = param.email.clone();

        let user = repo
            .create(NewUser {
                email: param.email,
                password_hash,
                role: param.role,
            })
            .await
            .map_err(|e| unique_violation(e, || format!("This email {email} already exists")))?;

        tracing::info!("Registered user {} with role {}", user.id, user.role.as_str());

        Ok(user)
    }

    /// Replaces a user's password.
    ///
    /// The password is the only mutable field; email and role keep the values the
    /// user was created with. A supplied password is re-hashed before it is stored.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::Conflict)` - No such user
    /// - `Err(AppError::PasswordErr)` - Hashing failed
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: &str, param: UpdateUserParam) -> Result<User, AppError> {
        let id = parse_record_id(id).ok_or_else(user_missing)?;

        let password_hash = match param.password {
            Some(password) => Some(hash_password(password).await?),
            None => None,
        };

        UserRepository::new(self.db)
            .update(id, UserChanges { password_hash })
            .await?
            .ok_or_else(user_missing)
    }

    /// Deletes a user and returns it as it was.
    ///
    /// Sessions of the deleted user stay in the store but stop authenticating,
    /// since the auth middleware re-reads the user on every request.
    ///
    /// # Returns
    /// - `Ok(User)` - The deleted user
    /// - `Err(AppError::Conflict)` - No such user
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<User, AppError> {
        let id = parse_record_id(id).ok_or_else(user_missing)?;

        UserRepository::new(self.db)
            .delete(id)
            .await?
            .ok_or_else(user_missing)
    }
}
