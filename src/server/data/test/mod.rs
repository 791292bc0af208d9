use chrono::{TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::user::Role,
    server::{
        data::{booking::BookingRepository, hotel::HotelRepository, user::UserRepository},
        model::{
            booking::{CreateBookingParam, UpdateBookingParam},
            hotel::{CreateHotelParam, UpdateHotelParam},
            user::{NewUser, UserChanges},
        },
    },
};

mod hotel;
