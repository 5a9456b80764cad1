//! Property-based tests for budget allocation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::BudgetAllocator;
use super::types::{AllocatedBudget, BudgetPolicy};
use crate::input::LooseValue;
use crate::restriction::{RestrictionLevel, RestrictionTable};
use crate::zones::{WaterSource, ZoneDraft};

fn level_strategy() -> impl Strategy<Value = RestrictionLevel> {
    prop_oneof![Just(RestrictionLevel::Level2), Just(RestrictionLevel::Level3)]
}

fn drafts_strategy() -> impl Strategy<Value = Vec<ZoneDraft>> {
    proptest::collection::vec(0i64..100_000, 0..6).prop_map(|areas| {
        areas
            .into_iter()
            .enumerate()
            .map(|(i, area)| ZoneDraft {
                name: format!("zone-{i}"),
                area: Decimal::new(area, 1),
                sprinkler_count: 1,
                flow_rate: dec!(10),
                source: WaterSource::Municipal,
                custom_pressure: None,
            })
            .collect()
    })
}

proptest! {
    /// Re-running with the same zones and month length yields the same budget.
    #[test]
    fn prop_allocation_is_idempotent(
        zones in drafts_strategy(),
        level in level_strategy(),
        days in 28u32..=31,
    ) {
        let table = RestrictionTable::default();
        let first = BudgetAllocator::allocate(BudgetPolicy::AreaBased, level, &zones, &table, days);
        let second = BudgetAllocator::allocate(BudgetPolicy::AreaBased, level, &zones, &table, days);

        prop_assert!(first.is_ok());
        prop_assert_eq!(first, second);
    }

    /// Area-based monthly budget is Σ area × rate × days, and daily × days recovers it.
    #[test]
    fn prop_area_based_matches_formula(
        zones in drafts_strategy(),
        level in level_strategy(),
        days in 28u32..=31,
    ) {
        let table = RestrictionTable::default();
        let budget = BudgetAllocator::allocate(BudgetPolicy::AreaBased, level, &zones, &table, days)
            .unwrap();

        let area: Decimal = zones.iter().map(|z| z.area).sum();
        let expected = area * table.rate(level) * Decimal::from(days);

        prop_assert_eq!(budget.monthly_litres, expected);
        prop_assert_eq!(budget.daily_litres * Decimal::from(days), expected);
    }

    /// Manual budgets scale kilolitres to litres regardless of zones.
    #[test]
    fn prop_manual_is_kilolitres_times_thousand(
        kl in 0i64..1_000_000,
        days in 28u32..=31,
    ) {
        let monthly_kilolitres = Decimal::new(kl, 2);
        let budget = BudgetAllocator::manual(monthly_kilolitres, days).unwrap();

        prop_assert_eq!(budget.monthly_litres, monthly_kilolitres * dec!(1000));
    }
}

#[test]
fn test_policy_from_form() {
    assert_eq!(
        BudgetPolicy::from_form(Some("manual"), Some(&LooseValue::from("12.5"))),
        BudgetPolicy::Manual {
            monthly_kilolitres: dec!(12.5)
        }
    );
    assert_eq!(
        BudgetPolicy::from_form(Some("Manual"), Some(&LooseValue::from("lots"))),
        BudgetPolicy::Manual {
            monthly_kilolitres: Decimal::ZERO
        }
    );
    assert_eq!(BudgetPolicy::from_form(Some("auto"), None), BudgetPolicy::AreaBased);
    assert_eq!(BudgetPolicy::from_form(None, None), BudgetPolicy::AreaBased);
}

#[test]
fn test_zero_budget_constant() {
    assert_eq!(AllocatedBudget::ZERO.monthly_litres, Decimal::ZERO);
    assert_eq!(AllocatedBudget::ZERO.daily_litres, Decimal::ZERO);
}
