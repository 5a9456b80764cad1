//! Entity prelude.

pub use super::usage_events::Entity as UsageEvents;
pub use super::users::Entity as Users;
pub use super::zones::Entity as Zones;
