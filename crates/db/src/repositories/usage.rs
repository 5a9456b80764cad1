//! Usage repository: the store of logged irrigation events.
//!
//! Sums are computed over fetched rows with the core aggregation helpers, so a
//! window with no events always yields zero.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Select, Set,
    TransactionTrait,
};
use tracing::{debug, info};
use watersaver_core::aggregation::{DailyTotal, daily_totals, saturating_sum, total_water};
use watersaver_core::input::LooseValue;
use watersaver_core::usage::{NewUsageEvent, UsageRecord, plan_log};
use watersaver_shared::types::{UsageEventId, ZoneId};

use super::zone::ZoneRepository;
use crate::entities::{usage_events, users};

/// Error types for usage operations.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    /// No profile for this username.
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    /// Month outside the supported calendar range.
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth {
        /// Year.
        year: i32,
        /// Month.
        month: u32,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Usage event repository.
#[derive(Debug, Clone)]
pub struct UsageRepository {
    db: DatabaseConnection,
}

impl UsageRepository {
    /// Creates a new usage repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a batch of usage events in one transaction.
    ///
    /// Returns the number of events stored. An empty batch is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; nothing is stored in that case.
    pub async fn insert_batch(
        &self,
        username: &str,
        events: &[NewUsageEvent],
    ) -> Result<usize, DbErr> {
        if events.is_empty() {
            return Ok(0);
        }

        let now: sea_orm::prelude::DateTimeWithTimeZone = chrono::Utc::now().into();
        let models = events.iter().map(|event| usage_events::ActiveModel {
            id: Set(UsageEventId::new().into_inner()),
            username: Set(username.to_string()),
            date: Set(event.date),
            zone_name: Set(event.zone_name.clone()),
            duration: Set(event.duration),
            water_used: Set(event.water_used),
            created_at: Set(now),
        });

        let txn = self.db.begin().await?;
        usage_events::Entity::insert_many(models).exec(&txn).await?;
        txn.commit().await?;

        Ok(events.len())
    }

    /// Logs today's per-zone durations for a user.
    ///
    /// `durations` is keyed by zone ID; entries for other users' zones, blank
    /// or non-positive durations are skipped. Returns the stored events.
    ///
    /// # Errors
    ///
    /// Returns `ProfileNotFound` if the user does not exist, or a database error.
    pub async fn log_usage(
        &self,
        username: &str,
        durations: &BTreeMap<ZoneId, LooseValue>,
        date: NaiveDate,
    ) -> Result<Vec<NewUsageEvent>, UsageError> {
        let owner = users::Entity::find_by_id(username.to_string())
            .one(&self.db)
            .await?;
        if owner.is_none() {
            return Err(UsageError::ProfileNotFound(username.to_string()));
        }

        let zones = ZoneRepository::new(self.db.clone())
            .list_by_owner(username)
            .await?;
        let events = plan_log(&zones, durations, date);
        let stored = self.insert_batch(username, &events).await?;

        info!(
            username = %username,
            %date,
            submitted = durations.len(),
            stored,
            "Usage logged"
        );

        Ok(events)
    }

    /// Total litres used on or after `from`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn total_since(&self, username: &str, from: NaiveDate) -> Result<Decimal, DbErr> {
        let records = self
            .records(by_owner(username).filter(usage_events::Column::Date.gte(from)))
            .await?;
        Ok(total_water(&records))
    }

    /// Total litres used between `from` and `to`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn total_between(
        &self,
        username: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Decimal, DbErr> {
        let records = self
            .records(
                by_owner(username)
                    .filter(usage_events::Column::Date.gte(from))
                    .filter(usage_events::Column::Date.lte(to)),
            )
            .await?;
        Ok(total_water(&records))
    }

    /// Minutes and litres logged for one zone name on one date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn zone_totals_on(
        &self,
        username: &str,
        date: NaiveDate,
        zone_name: &str,
    ) -> Result<(Decimal, Decimal), DbErr> {
        let records = self
            .records(
                by_owner(username)
                    .filter(usage_events::Column::Date.eq(date))
                    .filter(usage_events::Column::ZoneName.eq(zone_name)),
            )
            .await?;
        Ok(zone_totals(&records))
    }

    /// Per-date totals on or after `from`, ordered by date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn daily_totals_since(
        &self,
        username: &str,
        from: NaiveDate,
    ) -> Result<Vec<DailyTotal>, DbErr> {
        let records = self
            .records(by_owner(username).filter(usage_events::Column::Date.gte(from)))
            .await?;
        Ok(daily_totals(&records))
    }

    /// Total litres used in a calendar month.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` for an impossible month, or a database error.
    pub async fn total_for_month(
        &self,
        username: &str,
        year: i32,
        month: u32,
    ) -> Result<Decimal, UsageError> {
        let (first, last) =
            month_bounds(year, month).ok_or(UsageError::InvalidMonth { year, month })?;
        Ok(self.total_between(username, first, last).await?)
    }

    async fn records(
        &self,
        query: Select<usage_events::Entity>,
    ) -> Result<Vec<UsageRecord>, DbErr> {
        let rows = query
            .order_by_asc(usage_events::Column::Date)
            .all(&self.db)
            .await?;
        debug!(rows = rows.len(), "Fetched usage events");

        Ok(rows.into_iter().map(to_record).collect())
    }
}

fn by_owner(username: &str) -> Select<usage_events::Entity> {
    usage_events::Entity::find().filter(usage_events::Column::Username.eq(username))
}

/// Converts a usage row into the domain record.
#[must_use]
pub fn to_record(model: usage_events::Model) -> UsageRecord {
    UsageRecord {
        date: model.date,
        zone_name: model.zone_name,
        duration: model.duration,
        water_used: model.water_used,
    }
}

/// Sums minutes and litres over usage records.
#[must_use]
pub fn zone_totals(records: &[UsageRecord]) -> (Decimal, Decimal) {
    let duration = saturating_sum(records.iter().map(|r| r.duration));
    (duration, total_water(records))
}

/// First and last day of a calendar month.
#[must_use]
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = next.pred_opt()?;

    Some((first, last))
}

#[cfg(test)]
#[path = "usage_tests.rs"]
mod tests;
