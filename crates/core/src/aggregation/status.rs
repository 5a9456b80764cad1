//! Budget status classification.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Share of budget consumed, bucketed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    /// Under 50%.
    Safe,
    /// 50% up to (not including) 90%.
    Caution,
    /// 90% or more.
    Exceeded,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe => write!(f, "Safe"),
            Self::Caution => write!(f, "Caution"),
            Self::Exceeded => write!(f, "Exceeded"),
        }
    }
}

/// Buckets a percentage of budget used.
#[must_use]
pub fn classify(percent_used: Decimal) -> BudgetStatus {
    if percent_used < dec!(50) {
        BudgetStatus::Safe
    } else if percent_used < dec!(90) {
        BudgetStatus::Caution
    } else {
        BudgetStatus::Exceeded
    }
}

/// `round(usage / budget × 100, 1)`, or zero when the budget is not positive.
///
/// A ratio too large to represent clamps to the `Decimal` bound of its sign.
#[must_use]
pub fn percent_of(usage: Decimal, budget: Decimal) -> Decimal {
    if budget <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    usage
        .checked_div(budget)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map_or_else(
            || {
                if usage.is_sign_negative() {
                    Decimal::MIN
                } else {
                    Decimal::MAX
                }
            },
            |percent| percent.round_dp(1),
        )
}

/// Percentage used and its status. A zero budget is always `(0, Safe)`.
#[must_use]
pub fn budget_status(usage: Decimal, budget: Decimal) -> (Decimal, BudgetStatus) {
    let percent = percent_of(usage, budget);
    (percent, classify(percent))
}
