//! Irrigation zones and per-zone budget percentages.

pub mod annotate;
pub mod types;

pub use annotate::ZonePercentageAnnotator;
pub use types::{
    MAX_NAME_LEN, RawZoneDraft, WaterSource, Zone, ZoneDraft, ZoneUsage, present_drafts,
};
