//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records. Passwords
//! arrive here already hashed; the repository stores and returns the hash as-is.
//! Every read converts the stored role string back to a `Role`, failing with
//! `DbErr::Custom` if the row holds an unknown role.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::user::{NewUser, User, UserChanges};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every user ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users, possibly empty
    /// - `Err(DbErr)` - Database error or a row with an unknown role
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Finds a user by id.
    ///
    /// # Arguments
    /// - `id` - User id
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with this id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by email address, compared exactly.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user registered with this email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Inserts a user row.
    ///
    /// # Arguments
    /// - `new_user` - Email, password hash and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its assigned id
    /// - `Err(DbErr)` - Database error, including a unique email violation
    pub async fn create(&self, new_user: NewUser) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(new_user.email),
            password: ActiveValue::Set(new_user.password_hash),
            role: ActiveValue::Set(new_user.role.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(user)
    }

    /// Applies the supplied changes to a user. Without changes no write is issued.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The user after the update
    /// - `Ok(None)` - No user with this id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, id: i32, changes: UserChanges) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.clone().into();
        if let Some(password_hash) = changes.password_hash {
            active_model.password = ActiveValue::Set(password_hash);
        }

        if !active_model.is_changed() {
            return User::from_entity(user).map(Some);
        }

        let user = active_model.update(self.db).await?;

        User::from_entity(user).map(Some)
    }

    /// Deletes a user and returns the row as it was before deletion.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The deleted user
    /// - `Ok(None)` - No user with this id
    /// - `Err(DbErr)` - Database error during query or delete
    pub async fn delete(&self, id: i32) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        User::from_entity(user).map(Some)
    }
}
