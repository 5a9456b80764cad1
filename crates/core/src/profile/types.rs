//! Profile setup types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::ProfileError;
use crate::allocation::{AllocatedBudget, BudgetAllocator, BudgetPolicy};
use crate::input::LooseValue;
use crate::period::days_in_month;
use crate::restriction::{RestrictionLevel, RestrictionTable, normalize_town};
use crate::zones::{MAX_NAME_LEN, RawZoneDraft, ZoneDraft, present_drafts};

/// Longest username, in characters, that can be stored.
pub const MAX_USERNAME_LEN: usize = 100;

/// A setup submission as received from a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    /// Requested username.
    pub username: String,
    /// Town name, any case.
    pub town: String,
    /// `"manual"` for a fixed budget; anything else, or nothing, is area-based.
    #[serde(default)]
    pub budget_option: Option<String>,
    /// Monthly budget in kilolitres for the manual option.
    #[serde(default)]
    pub manual_budget: Option<LooseValue>,
    /// Zone rows; removed rows may be sent as `null`.
    #[serde(default)]
    pub zones: Vec<Option<RawZoneDraft>>,
}

/// A validated profile ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    /// Trimmed username.
    pub username: String,
    /// Canonical (upper-cased) town.
    pub town: String,
    /// Level resolved from the town.
    pub restriction_level: RestrictionLevel,
    /// Budget allocated for the month containing the setup date.
    pub budget: AllocatedBudget,
    /// Zones with a name.
    pub zones: Vec<ZoneDraft>,
}

impl ProfileDraft {
    /// Validates the draft and allocates its budget.
    ///
    /// Only zone rows with a non-blank name are kept, and only those count
    /// toward an area-based budget.
    ///
    /// # Errors
    ///
    /// Rejects a blank or over-long username, an unknown town, an over-long
    /// zone name, and figures too large to allocate a budget from.
    pub fn validate(
        &self,
        table: &RestrictionTable,
        today: NaiveDate,
    ) -> Result<NewProfile, ProfileError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(ProfileError::EmptyUsername);
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(ProfileError::UsernameTooLong {
                max: MAX_USERNAME_LEN,
            });
        }

        let town = normalize_town(&self.town);
        let restriction_level = table
            .classify(&town)
            .ok_or_else(|| ProfileError::UnknownTown(town.clone()))?;

        let zones = present_drafts(&self.zones);
        if let Some(zone) = zones.iter().find(|zone| !zone.name_fits()) {
            return Err(ProfileError::ZoneNameTooLong {
                name: zone.name.clone(),
                max: MAX_NAME_LEN,
            });
        }

        let policy =
            BudgetPolicy::from_form(self.budget_option.as_deref(), self.manual_budget.as_ref());
        let budget = BudgetAllocator::allocate(
            policy,
            restriction_level,
            &zones,
            table,
            days_in_month(today),
        )?;

        Ok(NewProfile {
            username: username.to_string(),
            town,
            restriction_level,
            budget,
            zones,
        })
    }
}
