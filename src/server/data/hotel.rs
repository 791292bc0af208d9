//! Hotel data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::hotel::{CreateHotelParam, Hotel, UpdateHotelParam};

pub struct HotelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every hotel, oldest first.
    pub async fn get_all(&self) -> Result<Vec<Hotel>, DbErr> {
        let hotels = entity::prelude::Hotel::find()
            .order_by_asc(entity::hotel::Column::Id)
            .all(self.db)
            .await?;

        Ok(hotels.into_iter().map(Hotel::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Hotel>, DbErr> {
        let hotel = entity::prelude::Hotel::find_by_id(id).one(self.db).await?;

        Ok(hotel.map(Hotel::from_entity))
    }

    /// Finds the hotel with exactly this name, if any.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Hotel>, DbErr> {
        let hotel = entity::prelude::Hotel::find()
            .filter(entity::hotel::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(hotel.map(Hotel::from_entity))
    }

    pub async fn create(&self, param: CreateHotelParam) -> Result<Hotel, DbErr> {
        let hotel = entity::hotel::ActiveModel {
            name: ActiveValue::Set(param.name),
            location: ActiveValue::Set(param.location),
            description: ActiveValue::Set(param.description),
            picture_list: ActiveValue::Set(param.picture_list),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Hotel::from_entity(hotel))
    }

    /// Applies every supplied field of `param` to the hotel.
    ///
    /// # Returns
    /// - `Ok(Some(Hotel))` - The hotel after the update
    /// - `Ok(None)` - No hotel with this id
    /// - `Err(DbErr)` - Database error, including a unique name violation
    pub async fn update(&self, id: i32, param: UpdateHotelParam) -> Result<Option<Hotel>, DbErr> {
        let Some(hotel) = entity::prelude::Hotel::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::hotel::ActiveModel = hotel.clone().into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(location) = param.location {
            active_model.location = ActiveValue::Set(location);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(picture_list) = param.picture_list {
            active_model.picture_list = ActiveValue::Set(picture_list);
        }

        if !active_model.is_changed() {
            return Ok(Some(Hotel::from_entity(hotel)));
        }

        let hotel = active_model.update(self.db).await?;

        Ok(Some(Hotel::from_entity(hotel)))
    }

    /// Deletes a hotel and returns the row as it was before deletion.
    pub async fn delete(&self, id: i32) -> Result<Option<Hotel>, DbErr> {
        let Some(hotel) = entity::prelude::Hotel::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        entity::prelude::Hotel::delete_by_id(id).exec(self.db).await?;

        Ok(Some(Hotel::from_entity(hotel)))
    }
}
