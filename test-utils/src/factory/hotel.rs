//! Hotel factory for creating test hotel entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hotels with customizable fields.
pub struct HotelFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location: String,
    description: String,
    picture_list: String,
}

impl<'a> HotelFactory<'a> {
    /// Creates a new HotelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hotel {id}"` where id is auto-incremented
    /// - location: `"Paris"`
    /// - description: `"A quiet place to stay"`
    /// - picture_list: `"front.jpg"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hotel {}", id),
            location: "Paris".to_string(),
            description: "A quiet place to stay".to_string(),
            picture_list: "front.jpg".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Builds and inserts the hotel entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::hotel::Model)` - Created hotel entity
    /// - `Err(DbErr)` - Database error during insert (including duplicate name)
    pub async fn build(self) -> Result<entity::hotel::Model, DbErr> {
        entity::hotel::ActiveModel {
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set(self.location),
            description: ActiveValue::Set(self.description),
            picture_list: ActiveValue::Set(self.picture_list),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hotel with default values.
pub async fn create_hotel(db: &DatabaseConnection) -> Result<entity::hotel::Model, DbErr> {
    HotelFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn rejects_duplicate_hotel_name() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Hotel).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        HotelFactory::new(db).name("Grand").build().await?;
        let duplicate = HotelFactory::new(db).name("Grand").build().await;

        assert!(duplicate.is_err());

        Ok(())
    }
}
