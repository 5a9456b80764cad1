//! `SeaORM` entities.

pub mod prelude;

pub mod sea_orm_active_enums;
pub mod usage_events;
pub mod users;
pub mod zones;
