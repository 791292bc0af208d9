//! Booking data repository for database operations.
//!
//! Bookings reference users and hotels by id string only; this repository does not
//! check that the referenced rows exist.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::booking::{Booking, CreateBookingParam, UpdateBookingParam};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Booking>, DbErr> {
        let bookings = entity::prelude::Booking::find()
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(bookings.into_iter().map(Booking::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        Ok(booking.map(Booking::from_entity))
    }

    pub async fn create(&self, param: CreateBookingParam) -> Result<Booking, DbErr> {
        let booking = entity::booking::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            hotel_id: ActiveValue::Set(param.hotel_id),
            date: ActiveValue::Set(param.date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(booking))
    }

    /// Applies every supplied field of `param`; `Ok(None)` if the booking is missing.
    pub async fn update(
        &self,
        id: i32,
        param: UpdateBookingParam,
    ) -> Result<Option<Booking>, DbErr> {
        let Some(booking) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::booking::ActiveModel = booking.clone().into();
        if let Some(user_id) = param.user_id {
            active_model.user_id = ActiveValue::Set(user_id);
        }
        if let Some(hotel_id) = param.hotel_id {
            active_model.hotel_id = ActiveValue::Set(hotel_id);
        }
        if let Some(date) = param.date {
            active_model.date = ActiveValue::Set(date);
        }

        if !active_model.is_changed() {
            return Ok(Some(Booking::from_entity(booking)));
        }

        let booking = active_model.update(self.db).await?;

        Ok(Some(Booking::from_entity(booking)))
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let Some(booking) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        entity::prelude::Booking::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(Booking::from_entity(booking)))
    }
}
