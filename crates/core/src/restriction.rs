//! Municipal restriction levels and allowance rates.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use watersaver_shared::RestrictionConfig;

/// Municipal water-use tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RestrictionLevel {
    /// Less severe restrictions.
    #[serde(rename = "Level 2")]
    Level2,
    /// More severe restrictions.
    #[serde(rename = "Level 3")]
    Level3,
}

impl fmt::Display for RestrictionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level2 => write!(f, "Level 2"),
            Self::Level3 => write!(f, "Level 3"),
        }
    }
}

impl FromStr for RestrictionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "level 2" | "2" => Ok(Self::Level2),
            "level 3" | "3" => Ok(Self::Level3),
            _ => Err(format!("Unknown restriction level: {s}")),
        }
    }
}

/// Town classification table with per-level daily allowance rates.
///
/// Towns are matched case-insensitively after trimming. A town listed under
/// both levels resolves to Level 2.
#[derive(Debug, Clone)]
pub struct RestrictionTable {
    towns: Vec<(String, RestrictionLevel)>,
    level_2_rate: Decimal,
    level_3_rate: Decimal,
}

impl RestrictionTable {
    /// Builds the table from configuration.
    #[must_use]
    pub fn new(config: &RestrictionConfig) -> Self {
        let level_2 = config
            .level_2_towns
            .iter()
            .map(|town| (normalize_town(town), RestrictionLevel::Level2));
        let level_3 = config
            .level_3_towns
            .iter()
            .map(|town| (normalize_town(town), RestrictionLevel::Level3));

        Self {
            towns: level_2.chain(level_3).collect(),
            level_2_rate: config.level_2_rate,
            level_3_rate: config.level_3_rate,
        }
    }

    /// Returns the restriction level for a town, or `None` if the town is unknown.
    #[must_use]
    pub fn classify(&self, town: &str) -> Option<RestrictionLevel> {
        let town = normalize_town(town);
        self.towns
            .iter()
            .find(|(name, _)| *name == town)
            .map(|(_, level)| *level)
    }

    /// Daily allowance in litres per m² for a restriction level.
    #[must_use]
    pub const fn rate(&self, level: RestrictionLevel) -> Decimal {
        match level {
            RestrictionLevel::Level2 => self.level_2_rate,
            RestrictionLevel::Level3 => self.level_3_rate,
        }
    }

    /// All known towns with their levels, Level 2 towns first.
    #[must_use]
    pub fn towns(&self) -> &[(String, RestrictionLevel)] {
        &self.towns
    }
}

impl Default for RestrictionTable {
    fn default() -> Self {
        Self::new(&RestrictionConfig::default())
    }
}

/// Canonical form of a town name: trimmed and upper-cased.
#[must_use]
pub fn normalize_town(town: &str) -> String {
    town.trim().to_uppercase()
}
