//! Water-saving tips shown on the dashboard.

use rand::seq::IndexedRandom;
use serde::Serialize;

/// A single water-saving tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tip {
    /// Short heading.
    pub title: &'static str,
    /// Advice text.
    pub text: &'static str,
}

const TIPS: [Tip; 9] = [
    Tip {
        title: "Water early or late",
        text: "Water your garden during the early morning or late evening to minimise evaporation.",
    },
    Tip {
        title: "Use mulch",
        text: "Mulch keeps soil moist, regulates temperature, and improves long-term soil health.",
    },
    Tip {
        title: "Collect rainwater",
        text: "Store water in barrels during wet periods for later use in dry spells.",
    },
    Tip {
        title: "Drip irrigation",
        text: "Deliver water directly to plant roots to reduce runoff and evaporation.",
    },
    Tip {
        title: "Hand watering",
        text: "Gives you better control over plant hydration and avoids overwatering.",
    },
    Tip {
        title: "Group plants by water needs",
        text: "Hydrozoning ensures efficient irrigation across plant types.",
    },
    Tip {
        title: "Avoid overwatering",
        text: "Test soil moisture before irrigating to prevent root rot and disease.",
    },
    Tip {
        title: "Use greywater",
        text: "Reuse safe household water (e.g. from sinks/showers) for non-edible plants.",
    },
    Tip {
        title: "Vertical gardening",
        text: "Reduces evaporation and maximises space efficiency in small gardens.",
    },
];

/// The full tip catalog.
#[must_use]
pub const fn catalog() -> &'static [Tip] {
    &TIPS
}

/// Picks a tip uniformly at random.
#[must_use]
pub fn random_tip() -> Tip {
    TIPS.choose(&mut rand::rng()).copied().unwrap_or(TIPS[0])
}
