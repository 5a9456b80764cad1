//! Profile repository for user and zone setup.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Set, SqlErr,
    TransactionTrait,
};
use tracing::info;
use watersaver_core::allocation::AllocatedBudget;
use watersaver_core::profile::NewProfile;
use watersaver_core::zones::ZoneDraft;
use watersaver_shared::types::ZoneId;

use crate::entities::{users, zones};

/// Error types for profile operations.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Username is already taken.
    #[error("Username '{0}' already exists")]
    AlreadyExists(String),

    /// No profile for this username.
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Profile repository.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    db: DatabaseConnection,
}

impl ProfileRepository {
    /// Creates a new profile repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a profile by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(username.to_string())
            .one(&self.db)
            .await
    }

    /// Creates a profile and its zones in one transaction.
    ///
    /// A concurrent setup that claims the username first surfaces as
    /// `AlreadyExists` through the primary key, not as a database error.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if the username is taken, or a database error.
    pub async fn create_profile(
        &self,
        profile: &NewProfile,
    ) -> Result<(users::Model, Vec<zones::Model>), ProfileError> {
        let txn = self.db.begin().await?;

        let existing = users::Entity::find_by_id(profile.username.clone())
            .one(&txn)
            .await?;
        if existing.is_some() {
            return Err(ProfileError::AlreadyExists(profile.username.clone()));
        }

        let now = chrono::Utc::now().into();
        let user = users::ActiveModel {
            username: Set(profile.username.clone()),
            town: Set(profile.town.clone()),
            restriction_level: Set(profile.restriction_level.into()),
            daily_budget_litres: Set(profile.budget.daily_litres),
            monthly_budget_litres: Set(profile.budget.monthly_litres),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| insert_error(&profile.username, e))?;

        let mut created = Vec::with_capacity(profile.zones.len());
        for draft in &profile.zones {
            let zone = zone_active_model(&profile.username, draft)
                .insert(&txn)
                .await?;
            created.push(zone);
        }

        txn.commit().await?;

        info!(
            username = %user.username,
            town = %user.town,
            zones = created.len(),
            "Profile created"
        );

        Ok((user, created))
    }

    /// Replaces a profile's daily and monthly budget.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the profile does not exist, or a database error.
    pub async fn update_budget(
        &self,
        username: &str,
        budget: AllocatedBudget,
    ) -> Result<users::Model, ProfileError> {
        let user = self
            .find_by_username(username)
            .await?
            .ok_or_else(|| ProfileError::NotFound(username.to_string()))?;

        let mut active = user.into_active_model();
        active.daily_budget_litres = Set(budget.daily_litres);
        active.monthly_budget_litres = Set(budget.monthly_litres);
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }
}

/// Maps a failed user insert; a unique violation means the username is taken.
fn insert_error(username: &str, err: DbErr) -> ProfileError {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        ProfileError::AlreadyExists(username.to_string())
    } else {
        ProfileError::Database(err)
    }
}

/// Builds a zone row owned by `username`.
pub(crate) fn zone_active_model(username: &str, draft: &ZoneDraft) -> zones::ActiveModel {
    zones::ActiveModel {
        id: Set(ZoneId::new().into_inner()),
        username: Set(username.to_string()),
        name: Set(draft.name.clone()),
        area: Set(draft.area),
        sprinkler_count: Set(draft.sprinkler_count),
        flow_rate: Set(draft.flow_rate),
        source: Set(draft.source.into()),
        custom_pressure: Set(draft.custom_pressure),
        created_at: Set(chrono::Utc::now().into()),
    }
}
