//! Usage-logging policy.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use watersaver_shared::types::ZoneId;

use super::calculator::litres_used;
use crate::input::LooseValue;
use crate::zones::Zone;

/// A usage event about to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUsageEvent {
    /// Day the irrigation happened.
    pub date: NaiveDate,
    /// Name of the zone at logging time.
    pub zone_name: String,
    /// Minutes irrigated.
    pub duration: Decimal,
    /// Litres used (flow rate × duration).
    pub water_used: Decimal,
}

/// A stored usage event, as read back for aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Day the irrigation happened.
    pub date: NaiveDate,
    /// Zone name recorded with the event.
    pub zone_name: String,
    /// Minutes irrigated.
    pub duration: Decimal,
    /// Litres used.
    pub water_used: Decimal,
}

/// Turns submitted per-zone durations into usage events.
///
/// Only the user's own zones are considered, in the order given. Entries that
/// are blank, unparseable, zero, or negative are skipped, as are entries whose
/// volume does not fit in a `Decimal`; entries keyed by unknown zone IDs are
/// ignored.
#[must_use]
pub fn plan_log(
    zones: &[Zone],
    durations: &BTreeMap<ZoneId, LooseValue>,
    date: NaiveDate,
) -> Vec<NewUsageEvent> {
    zones
        .iter()
        .filter_map(|zone| {
            let minutes = durations.get(&zone.id)?.to_decimal()?;
            if minutes <= Decimal::ZERO {
                return None;
            }

            let water_used = litres_used(Some(zone.flow_rate), Some(minutes))?;

            Some(NewUsageEvent {
                date,
                zone_name: zone.name.clone(),
                duration: minutes,
                water_used,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::WaterSource;
    use rust_decimal_macros::dec;

    fn zone(name: &str, flow_rate: Decimal) -> Zone {
        Zone {
            id: ZoneId::new(),
            name: name.to_string(),
            area: dec!(50),
            sprinkler_count: 4,
            flow_rate,
            source: WaterSource::Municipal,
            custom_pressure: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_plan_log_computes_litres() {
        let front = zone("Front", dec!(10));
        let durations = BTreeMap::from([(front.id, LooseValue::from("30"))]);

        let events = plan_log(&[front], &durations, today());

        assert_eq!(
            events,
            vec![NewUsageEvent {
                date: today(),
                zone_name: "Front".to_string(),
                duration: dec!(30),
                water_used: dec!(300),
            }]
        );
    }

    #[test]
    fn test_plan_log_skips_invalid_durations() {
        let zones = vec![
            zone("Blank", dec!(10)),
            zone("Garbage", dec!(10)),
            zone("Zero", dec!(10)),
            zone("Negative", dec!(10)),
            zone("Missing", dec!(10)),
            zone("Valid", dec!(8)),
        ];
        let durations = BTreeMap::from([
            (zones[0].id, LooseValue::from("  ")),
            (zones[1].id, LooseValue::from("ten")),
            (zones[2].id, LooseValue::from("0")),
            (zones[3].id, LooseValue::from(-5_i64)),
            (zones[5].id, LooseValue::from(15_i64)),
        ]);

        let events = plan_log(&zones, &durations, today());

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].zone_name, "Valid");
        assert_eq!(events[0].water_used, dec!(120));
    }

    #[test]
    fn test_plan_log_skips_overflowing_volume() {
        let zones = vec![zone("Huge", dec!(10)), zone("Normal", dec!(10))];
        let durations = BTreeMap::from([
            (zones[0].id, LooseValue::from("79228162514264337593543950335")),
            (zones[1].id, LooseValue::from("20")),
        ]);

        let events = plan_log(&zones, &durations, today());

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].zone_name, "Normal");
        assert_eq!(events[0].water_used, dec!(200));
    }

    #[test]
    fn test_plan_log_ignores_foreign_zone_ids() {
        let own = zone("Own", dec!(10));
        let durations = BTreeMap::from([(ZoneId::new(), LooseValue::from("30"))]);

        assert!(plan_log(&[own], &durations, today()).is_empty());
    }
}
