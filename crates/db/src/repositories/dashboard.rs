//! Dashboard repository: gathers a user's usage and assembles the dashboard.

use chrono::{Datelike, NaiveDate};
use sea_orm::{DatabaseConnection, DbErr};
use tracing::debug;
use watersaver_core::aggregation::{AggregationEngine, Dashboard, DashboardInput, ProfileSnapshot};
use watersaver_core::period::MonthPeriod;
use watersaver_core::zones::ZoneUsage;

use super::profile::ProfileRepository;
use super::usage::{UsageError, UsageRepository};
use super::zone::ZoneRepository;
use crate::entities::users;

/// Error types for dashboard operations.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// No profile for this username; the user must complete setup first.
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    /// Usage store error.
    #[error(transparent)]
    Usage(UsageError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<UsageError> for DashboardError {
    fn from(err: UsageError) -> Self {
        match err {
            UsageError::ProfileNotFound(username) => Self::ProfileNotFound(username),
            UsageError::Database(e) => Self::Database(e),
            other @ UsageError::InvalidMonth { .. } => Self::Usage(other),
        }
    }
}

/// Dashboard repository.
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    db: DatabaseConnection,
}

impl DashboardRepository {
    /// Creates a new dashboard repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the dashboard for `username` as of `today`.
    ///
    /// # Errors
    ///
    /// Returns `ProfileNotFound` if the user has no profile, or a database error.
    pub async fn load(&self, username: &str, today: NaiveDate) -> Result<Dashboard, DashboardError> {
        let input = self.load_input(username, today).await?;
        Ok(AggregationEngine::assemble(input))
    }

    /// Reads everything the engine needs for one dashboard.
    ///
    /// # Errors
    ///
    /// Returns `ProfileNotFound` if the user has no profile, or a database error.
    pub async fn load_input(
        &self,
        username: &str,
        today: NaiveDate,
    ) -> Result<DashboardInput, DashboardError> {
        let user = ProfileRepository::new(self.db.clone())
            .find_by_username(username)
            .await?
            .ok_or_else(|| DashboardError::ProfileNotFound(username.to_string()))?;

        let zones = ZoneRepository::new(self.db.clone())
            .list_by_owner(username)
            .await?;
        let usage = UsageRepository::new(self.db.clone());
        let period = MonthPeriod::containing(today);

        let mut today_by_zone = Vec::with_capacity(zones.len());
        for zone in &zones {
            let (duration, litres) = usage.zone_totals_on(username, today, &zone.name).await?;
            today_by_zone.push(ZoneUsage::new(zone.name.clone(), duration, litres));
        }

        let week_total = usage
            .total_between(username, period.week_start(), today)
            .await?;
        let month_total = usage
            .total_for_month(username, today.year(), today.month())
            .await?;
        let month_to_date_total = usage.total_since(username, period.first_day).await?;
        let daily_totals = usage.daily_totals_since(username, period.first_day).await?;

        debug!(
            username = %username,
            %today,
            zones = zones.len(),
            days_with_usage = daily_totals.len(),
            "Dashboard inputs loaded"
        );

        Ok(DashboardInput {
            profile: snapshot(user),
            period,
            today_by_zone,
            week_total,
            month_total,
            month_to_date_total,
            daily_totals,
        })
    }
}

/// Projects a user row onto the fields the dashboard needs.
#[must_use]
pub fn snapshot(user: users::Model) -> ProfileSnapshot {
    ProfileSnapshot {
        username: user.username,
        town: user.town,
        restriction_level: user.restriction_level.into(),
        daily_budget: user.daily_budget_litres,
        monthly_budget: user.monthly_budget_litres,
    }
}
