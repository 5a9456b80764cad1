//! Zone repository for a user's irrigation zones.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use tracing::info;
use watersaver_core::zones::{Zone, ZoneDraft};
use watersaver_shared::types::ZoneId;

use super::profile::zone_active_model;
use crate::entities::{users, zones};

/// Error types for zone operations.
#[derive(Debug, thiserror::Error)]
pub enum ZoneError {
    /// No profile for this username.
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    /// Zone does not exist or belongs to another user.
    #[error("Zone not found: {0}")]
    NotFound(ZoneId),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Zone repository.
#[derive(Debug, Clone)]
pub struct ZoneRepository {
    db: DatabaseConnection,
}

impl ZoneRepository {
    /// Creates a new zone repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's zones in creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_by_owner(&self, username: &str) -> Result<Vec<Zone>, DbErr> {
        let rows = zones::Entity::find()
            .filter(zones::Column::Username.eq(username))
            .order_by_asc(zones::Column::CreatedAt)
            .order_by_asc(zones::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(to_domain).collect())
    }

    /// Adds a zone to an existing profile.
    ///
    /// The budget is left as is.
    ///
    /// # Errors
    ///
    /// Returns `ProfileNotFound` if the user does not exist, or a database error.
    pub async fn add(&self, username: &str, draft: &ZoneDraft) -> Result<Zone, ZoneError> {
        let owner = users::Entity::find_by_id(username.to_string())
            .one(&self.db)
            .await?;
        if owner.is_none() {
            return Err(ZoneError::ProfileNotFound(username.to_string()));
        }

        let zone = zone_active_model(username, draft).insert(&self.db).await?;
        info!(username = %username, zone_id = %zone.id, name = %zone.name, "Zone added");

        Ok(to_domain(zone))
    }

    /// Deletes a zone owned by `username`.
    ///
    /// Usage history recorded against the zone's name is kept.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no zone with this ID belongs to the user.
    pub async fn delete(&self, username: &str, zone_id: ZoneId) -> Result<(), ZoneError> {
        let result = zones::Entity::delete_many()
            .filter(zones::Column::Id.eq(zone_id.into_inner()))
            .filter(zones::Column::Username.eq(username))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ZoneError::NotFound(zone_id));
        }

        info!(username = %username, zone_id = %zone_id, "Zone deleted");
        Ok(())
    }
}

/// Converts a zone row into the domain type.
#[must_use]
pub fn to_domain(model: zones::Model) -> Zone {
    Zone {
        id: ZoneId::from_uuid(model.id),
        name: model.name,
        area: model.area,
        sprinkler_count: model.sprinkler_count,
        flow_rate: model.flow_rate,
        source: model.source.into(),
        custom_pressure: model.custom_pressure,
    }
}
