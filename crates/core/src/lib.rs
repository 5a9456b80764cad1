//! Core business logic for WaterSaver.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, budget rules, and usage calculations live here.
//!
//! # Modules
//!
//! - `units` - Litre/kilolitre conversion
//! - `usage` - Volume used per irrigation event and the logging policy
//! - `allocation` - Monthly/daily budget allocation
//! - `aggregation` - Daily, weekly, and monthly statistics for the dashboard
//! - `zones` - Irrigation zones and per-zone budget percentages
//! - `restriction` - Municipal restriction levels and allowance rates
//! - `profile` - Account setup validation
//! - `input` - Lenient parsing of externally supplied numbers
//! - `period` - Calendar month helpers
//! - `tips` - Water-saving tips

pub mod aggregation;
pub mod allocation;
pub mod input;
pub mod period;
pub mod profile;
pub mod restriction;
pub mod tips;
pub mod units;
pub mod usage;
pub mod zones;
