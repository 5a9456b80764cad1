//! Zone data types.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use watersaver_shared::types::ZoneId;

use crate::input::{self, LooseValue};

/// Where a zone draws its water from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterSource {
    /// Municipal mains supply.
    #[default]
    Municipal,
    /// Borehole pump.
    Borehole,
    /// Gravity-fed rain tank.
    RainTank,
    /// Dam or reservoir outlet.
    DamReservoir,
}

impl WaterSource {
    /// Typical supply pressure in bar.
    #[must_use]
    pub const fn default_pressure(self) -> Decimal {
        match self {
            Self::Municipal => dec!(3.0),
            Self::Borehole => dec!(2.5),
            Self::RainTank => dec!(1.5),
            Self::DamReservoir => dec!(2.0),
        }
    }

    /// Stable storage key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Municipal => "municipal",
            Self::Borehole => "borehole",
            Self::RainTank => "rain_tank",
            Self::DamReservoir => "dam_reservoir",
        }
    }

    /// Parses a storage key, falling back to municipal for blank or unknown input.
    #[must_use]
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("borehole") => Self::Borehole,
            Some("rain_tank") => Self::RainTank,
            Some("dam_reservoir") => Self::DamReservoir,
            _ => Self::Municipal,
        }
    }
}

impl fmt::Display for WaterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored irrigation zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone ID.
    pub id: ZoneId,
    /// Display name; usage events refer to zones by this name.
    pub name: String,
    /// Irrigated area in m².
    pub area: Decimal,
    /// Number of sprinkler heads.
    pub sprinkler_count: i32,
    /// Flow rate in litres per minute.
    pub flow_rate: Decimal,
    /// Water source.
    pub source: WaterSource,
    /// Measured pressure in bar, overriding the source default.
    pub custom_pressure: Option<Decimal>,
}

impl Zone {
    /// Custom pressure if set, otherwise the source default.
    #[must_use]
    pub fn effective_pressure(&self) -> Decimal {
        self.custom_pressure
            .unwrap_or_else(|| self.source.default_pressure())
    }
}

/// A zone as submitted by a client, before parsing.
///
/// Every numeric field is lenient: blank or malformed values fall back to
/// zero (or `None` for the custom pressure).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawZoneDraft {
    /// Zone name. Drafts with a blank name are dropped.
    #[serde(default)]
    pub name: Option<String>,
    /// Area in m².
    #[serde(default)]
    pub area: Option<LooseValue>,
    /// Sprinkler count.
    #[serde(default)]
    pub sprinklers: Option<LooseValue>,
    /// Flow rate in L/min.
    #[serde(default)]
    pub flow_rate: Option<LooseValue>,
    /// Water source key.
    #[serde(default)]
    pub source: Option<String>,
    /// Custom pressure in bar.
    #[serde(default)]
    pub custom_pressure: Option<LooseValue>,
}

/// Longest zone name, in characters, that can be stored.
pub const MAX_NAME_LEN: usize = 100;

/// A parsed zone ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDraft {
    /// Zone name (trimmed, non-empty).
    pub name: String,
    /// Area in m².
    pub area: Decimal,
    /// Sprinkler count.
    pub sprinkler_count: i32,
    /// Flow rate in L/min.
    pub flow_rate: Decimal,
    /// Water source.
    pub source: WaterSource,
    /// Custom pressure in bar.
    pub custom_pressure: Option<Decimal>,
}

impl ZoneDraft {
    /// Parses a raw draft. Returns `None` when the name is missing or blank.
    #[must_use]
    pub fn parse(raw: &RawZoneDraft) -> Option<Self> {
        let name = raw.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            area: input::decimal_or(raw.area.as_ref(), Decimal::ZERO),
            sprinkler_count: input::int_or(raw.sprinklers.as_ref(), 0),
            flow_rate: input::decimal_or(raw.flow_rate.as_ref(), Decimal::ZERO),
            source: WaterSource::parse_or_default(raw.source.as_deref()),
            custom_pressure: input::optional_decimal(raw.custom_pressure.as_ref()),
        })
    }
}

impl ZoneDraft {
    /// Returns true if the name is within [`MAX_NAME_LEN`] characters.
    #[must_use]
    pub fn name_fits(&self) -> bool {
        self.name.chars().count() <= MAX_NAME_LEN
    }
}

/// Keeps the drafts that are present and named, in submission order.
///
/// Clients that delete rows mid-form leave holes (`None`) in the sequence.
#[must_use]
pub fn present_drafts(drafts: &[Option<RawZoneDraft>]) -> Vec<ZoneDraft> {
    drafts.iter().flatten().filter_map(ZoneDraft::parse).collect()
}

/// Usage attributed to one zone over some window, in litres.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneUsage {
    /// Zone name.
    pub name: String,
    /// Total minutes irrigated.
    pub duration: Decimal,
    /// Total litres used.
    pub usage: Decimal,
    /// Share of the budget consumed, in percent. Set by the annotator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_of_budget: Option<Decimal>,
}

impl ZoneUsage {
    /// Creates an unannotated usage record.
    #[must_use]
    pub fn new(name: impl Into<String>, duration: Decimal, usage: Decimal) -> Self {
        Self {
            name: name.into(),
            duration,
            usage,
            percent_of_budget: None,
        }
    }
}
