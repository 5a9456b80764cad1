//! Budget allocation rules.

use rust_decimal::Decimal;

use super::error::AllocationError;
use super::types::{AllocatedBudget, BudgetPolicy};
use crate::restriction::{RestrictionLevel, RestrictionTable};
use crate::units;
use crate::zones::ZoneDraft;

/// Computes monthly and daily budgets.
///
/// Allocation is pinned to the length of the month it runs in. A budget set
/// in a 31-day month is not rebalanced when a 30-day month starts; it only
/// changes through an explicit edit.
pub struct BudgetAllocator;

impl BudgetAllocator {
    /// Allocates a budget under `policy` for the user's zones.
    ///
    /// For the area-based policy each zone contributes
    /// `area × rate(level) × days_in_month` litres.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if any product or the total does not fit in a `Decimal`.
    pub fn allocate(
        policy: BudgetPolicy,
        level: RestrictionLevel,
        zones: &[ZoneDraft],
        table: &RestrictionTable,
        days_in_month: u32,
    ) -> Result<AllocatedBudget, AllocationError> {
        match policy {
            BudgetPolicy::Manual { monthly_kilolitres } => {
                Self::manual(monthly_kilolitres, days_in_month)
            }
            BudgetPolicy::AreaBased => {
                let rate = table.rate(level);
                let monthly_litres = zones.iter().try_fold(Decimal::ZERO, |total, zone| {
                    Self::zone_allowance(zone.area, rate, days_in_month)
                        .and_then(|allowance| total.checked_add(allowance))
                        .ok_or(AllocationError::Overflow)
                })?;
                Ok(Self::split(monthly_litres, days_in_month))
            }
        }
    }

    /// Manual policy: a monthly budget in kilolitres spread over the month.
    ///
    /// Also used when a user edits their budget.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the budget in litres does not fit in a `Decimal`.
    pub fn manual(
        monthly_kilolitres: Decimal,
        days_in_month: u32,
    ) -> Result<AllocatedBudget, AllocationError> {
        let monthly_litres =
            units::to_litres(monthly_kilolitres).ok_or(AllocationError::Overflow)?;
        Ok(Self::split(monthly_litres, days_in_month))
    }

    /// Monthly allowance in litres for one zone, or `None` on overflow.
    #[must_use]
    pub fn zone_allowance(area: Decimal, rate: Decimal, days_in_month: u32) -> Option<Decimal> {
        area.checked_mul(rate)?
            .checked_mul(Decimal::from(days_in_month))
    }

    fn split(monthly_litres: Decimal, days_in_month: u32) -> AllocatedBudget {
        let daily_litres = if days_in_month == 0 {
            Decimal::ZERO
        } else {
            monthly_litres / Decimal::from(days_in_month)
        };

        AllocatedBudget {
            monthly_litres,
            daily_litres,
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::zones::WaterSource;
    use rust_decimal_macros::dec;

    fn draft(name: &str, area: Decimal) -> ZoneDraft {
        ZoneDraft {
            name: name.to_string(),
            area,
            sprinkler_count: 0,
            flow_rate: Decimal::ZERO,
            source: WaterSource::Municipal,
            custom_pressure: None,
        }
    }

    #[test]
    fn test_area_based_level_2_single_zone() {
        let budget = BudgetAllocator::allocate(
            BudgetPolicy::AreaBased,
            RestrictionLevel::Level2,
            &[draft("Lawn", dec!(100))],
            &RestrictionTable::default(),
            30,
        )
        .unwrap();

        assert_eq!(budget.monthly_litres, dec!(15000));
        assert_eq!(budget.daily_litres, dec!(500));
    }

    #[test]
    fn test_area_based_level_3_sums_zones() {
        let budget = BudgetAllocator::allocate(
            BudgetPolicy::AreaBased,
            RestrictionLevel::Level3,
            &[draft("Front", dec!(40)), draft("Back", dec!(60)), draft("Bare", Decimal::ZERO)],
            &RestrictionTable::default(),
            31,
        )
        .unwrap();

        // (40 + 60) × 3 × 31
        assert_eq!(budget.monthly_litres, dec!(9300));
        assert_eq!(budget.daily_litres, dec!(300));
    }

    #[test]
    fn test_area_based_without_zones_is_zero() {
        let budget = BudgetAllocator::allocate(
            BudgetPolicy::AreaBased,
            RestrictionLevel::Level2,
            &[],
            &RestrictionTable::default(),
            30,
        );

        assert_eq!(budget, Ok(AllocatedBudget::ZERO));
    }

    #[test]
    fn test_manual_ignores_zones() {
        let budget = BudgetAllocator::allocate(
            BudgetPolicy::Manual {
                monthly_kilolitres: dec!(12),
            },
            RestrictionLevel::Level3,
            &[draft("Lawn", dec!(1000))],
            &RestrictionTable::default(),
            30,
        )
        .unwrap();

        assert_eq!(budget.monthly_litres, dec!(12000));
        assert_eq!(budget.daily_litres, dec!(400));
    }

    #[test]
    fn test_manual_budget_depends_on_month_length() {
        let thirty = BudgetAllocator::manual(dec!(6.2), 30).unwrap();
        let thirty_one = BudgetAllocator::manual(dec!(6.2), 31).unwrap();

        assert_eq!(thirty_one.daily_litres, dec!(200));
        assert!(thirty.daily_litres > thirty_one.daily_litres);
    }

    #[test]
    fn test_zero_days_does_not_divide() {
        assert_eq!(
            BudgetAllocator::manual(dec!(5), 0).unwrap().daily_litres,
            Decimal::ZERO
        );
    }

    #[test]
    fn test_huge_area_is_rejected_not_panicking() {
        let budget = BudgetAllocator::allocate(
            BudgetPolicy::AreaBased,
            RestrictionLevel::Level2,
            &[draft("Lawn", Decimal::MAX)],
            &RestrictionTable::default(),
            31,
        );

        assert_eq!(budget, Err(AllocationError::Overflow));
    }

    #[test]
    fn test_zone_sum_overflow_is_rejected() {
        // Each allowance fits on its own; the total does not.
        let area = Decimal::MAX / dec!(100);
        let budget = BudgetAllocator::allocate(
            BudgetPolicy::AreaBased,
            RestrictionLevel::Level3,
            &[draft("Front", area), draft("Back", area)],
            &RestrictionTable::default(),
            31,
        );

        assert_eq!(budget, Err(AllocationError::Overflow));
    }

    #[test]
    fn test_huge_manual_budget_is_rejected() {
        assert_eq!(
            BudgetAllocator::manual(Decimal::MAX, 30),
            Err(AllocationError::Overflow)
        );
    }
}
