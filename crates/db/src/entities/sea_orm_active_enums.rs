//! Postgres enum types and their conversions to domain enums.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use watersaver_core::restriction::RestrictionLevel as DomainRestrictionLevel;
use watersaver_core::zones::WaterSource as DomainWaterSource;

/// Municipal restriction tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "restriction_level")]
pub enum RestrictionLevel {
    #[sea_orm(string_value = "level_2")]
    Level2,
    #[sea_orm(string_value = "level_3")]
    Level3,
}

/// Where a zone draws its water from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "water_source")]
pub enum WaterSource {
    #[sea_orm(string_value = "municipal")]
    Municipal,
    #[sea_orm(string_value = "borehole")]
    Borehole,
    #[sea_orm(string_value = "rain_tank")]
    RainTank,
    #[sea_orm(string_value = "dam_reservoir")]
    DamReservoir,
}

impl From<DomainRestrictionLevel> for RestrictionLevel {
    fn from(level: DomainRestrictionLevel) -> Self {
        match level {
            DomainRestrictionLevel::Level2 => Self::Level2,
            DomainRestrictionLevel::Level3 => Self::Level3,
        }
    }
}

impl From<RestrictionLevel> for DomainRestrictionLevel {
    fn from(level: RestrictionLevel) -> Self {
        match level {
            RestrictionLevel::Level2 => Self::Level2,
            RestrictionLevel::Level3 => Self::Level3,
        }
    }
}

impl From<DomainWaterSource> for WaterSource {
    fn from(source: DomainWaterSource) -> Self {
        match source {
            DomainWaterSource::Municipal => Self::Municipal,
            DomainWaterSource::Borehole => Self::Borehole,
            DomainWaterSource::RainTank => Self::RainTank,
            DomainWaterSource::DamReservoir => Self::DamReservoir,
        }
    }
}

impl From<WaterSource> for DomainWaterSource {
    fn from(source: WaterSource) -> Self {
        match source {
            WaterSource::Municipal => Self::Municipal,
            WaterSource::Borehole => Self::Borehole,
            WaterSource::RainTank => Self::RainTank,
            WaterSource::DamReservoir => Self::DamReservoir,
        }
    }
}
