//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod dashboard;
pub mod profile;
pub mod usage;
pub mod zone;

pub use dashboard::{DashboardError, DashboardRepository};
pub use profile::{ProfileError, ProfileRepository};
pub use usage::{UsageError, UsageRepository};
pub use zone::{ZoneError, ZoneRepository};
