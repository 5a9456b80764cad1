//! Percent-of-budget figures for per-zone usage.

use rust_decimal::Decimal;

use super::types::ZoneUsage;
use crate::aggregation::status::percent_of;

/// Attaches `percent_of_budget` to per-zone usage breakdowns.
pub struct ZonePercentageAnnotator;

impl ZonePercentageAnnotator {
    /// Returns a copy of `zones` with each record's share of `budget` filled in.
    ///
    /// The share is `round(usage / budget * 100, 1)`, or zero when the budget
    /// is zero. Order and all other fields are preserved; an existing
    /// percentage is overwritten, so re-annotating with the same budget is a
    /// no-op.
    #[must_use]
    pub fn annotate(zones: &[ZoneUsage], budget: Decimal) -> Vec<ZoneUsage> {
        zones
            .iter()
            .map(|zone| ZoneUsage {
                percent_of_budget: Some(percent_of(zone.usage, budget)),
                ..zone.clone()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn zones() -> Vec<ZoneUsage> {
        vec![
            ZoneUsage::new("Front", dec!(30), dec!(300)),
            ZoneUsage::new("Back", dec!(0), dec!(0)),
            ZoneUsage::new("Veg", dec!(45), dec!(6999)),
        ]
    }

    #[test]
    fn test_annotate_against_weekly_budget() {
        let annotated = ZonePercentageAnnotator::annotate(&zones(), dec!(7000));

        assert_eq!(annotated[0].percent_of_budget, Some(dec!(4.3)));
        assert_eq!(annotated[1].percent_of_budget, Some(dec!(0)));
        assert_eq!(annotated[2].percent_of_budget, Some(dec!(100.0)));
    }

    #[test]
    fn test_annotate_zero_budget_is_zero() {
        let annotated = ZonePercentageAnnotator::annotate(&zones(), Decimal::ZERO);

        assert!(
            annotated
                .iter()
                .all(|z| z.percent_of_budget == Some(Decimal::ZERO))
        );
    }

    #[test]
    fn test_annotate_preserves_order_and_fields() {
        let input = zones();
        let annotated = ZonePercentageAnnotator::annotate(&input, dec!(1000));

        assert_eq!(annotated.len(), input.len());
        for (before, after) in input.iter().zip(&annotated) {
            assert_eq!(before.name, after.name);
            assert_eq!(before.duration, after.duration);
            assert_eq!(before.usage, after.usage);
        }
        // Input untouched
        assert!(input.iter().all(|z| z.percent_of_budget.is_none()));
    }

    proptest! {
        /// Annotating twice with the same budget gives the same percentages.
        #[test]
        fn prop_annotate_is_idempotent(
            usages in proptest::collection::vec(0i64..1_000_000, 0..8),
            budget in 0i64..1_000_000,
        ) {
            let zones: Vec<ZoneUsage> = usages
                .iter()
                .enumerate()
                .map(|(i, u)| ZoneUsage::new(format!("zone-{i}"), Decimal::ONE, Decimal::from(*u)))
                .collect();
            let budget = Decimal::from(budget);

            let once = ZonePercentageAnnotator::annotate(&zones, budget);
            let twice = ZonePercentageAnnotator::annotate(&once, budget);

            prop_assert_eq!(once, twice);
        }
    }
}
