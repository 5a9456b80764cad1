//! Flow rate × duration → volume.

use rust_decimal::Decimal;

use crate::units;

/// Litres used by running a zone at `flow_rate` (L/min) for `duration` minutes.
///
/// Missing inputs count as zero. This is the value stored on a usage event.
/// Returns `None` if the product does not fit in a `Decimal`.
#[must_use]
pub fn litres_used(flow_rate: Option<Decimal>, duration: Option<Decimal>) -> Option<Decimal> {
    flow_rate
        .unwrap_or_default()
        .checked_mul(duration.unwrap_or_default())
}

/// Kilolitres used, rounded to 2 decimal places, or `None` on overflow.
///
/// Does not validate sign: callers reject non-positive durations first.
#[must_use]
pub fn compute_usage(flow_rate: Option<Decimal>, duration: Option<Decimal>) -> Option<Decimal> {
    litres_used(flow_rate, duration).map(units::to_kilolitres)
}
