//! Allocation data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::input::{self, LooseValue};

/// How the monthly budget is chosen at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum BudgetPolicy {
    /// Operator-supplied monthly budget.
    Manual {
        /// Monthly budget in kilolitres.
        monthly_kilolitres: Decimal,
    },
    /// Sum of per-zone allowances from area and restriction level.
    AreaBased,
}

impl BudgetPolicy {
    /// Resolves the policy from a setup form.
    ///
    /// `"manual"` selects the manual policy with the given budget (zero when
    /// blank or unparseable); anything else selects the area-based policy.
    #[must_use]
    pub fn from_form(option: Option<&str>, manual_budget: Option<&LooseValue>) -> Self {
        match option.map(str::trim) {
            Some(opt) if opt.eq_ignore_ascii_case("manual") => Self::Manual {
                monthly_kilolitres: input::decimal_or(manual_budget, Decimal::ZERO),
            },
            _ => Self::AreaBased,
        }
    }
}

/// A budget fixed at allocation time, in litres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatedBudget {
    /// Monthly budget in litres.
    pub monthly_litres: Decimal,
    /// Daily budget in litres.
    pub daily_litres: Decimal,
}

impl AllocatedBudget {
    /// A zero budget.
    pub const ZERO: Self = Self {
        monthly_litres: Decimal::ZERO,
        daily_litres: Decimal::ZERO,
    };
}
