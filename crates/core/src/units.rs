//! Litre/kilolitre conversion.
//!
//! Volumes are stored in litres and reported in kilolitres. Every value that
//! crosses into the reporting unit goes through [`to_kilolitres`].

use rust_decimal::Decimal;

/// Litres in one kilolitre.
pub const LITRES_PER_KILOLITRE: Decimal = Decimal::ONE_THOUSAND;

/// Decimal places kept for kilolitre figures.
pub const KILOLITRE_DP: u32 = 2;

/// Converts litres to kilolitres, rounded half-even to 2 decimal places.
#[must_use]
pub fn to_kilolitres(litres: Decimal) -> Decimal {
    (litres / LITRES_PER_KILOLITRE).round_dp(KILOLITRE_DP)
}

/// Converts kilolitres to litres. No rounding is applied.
///
/// Returns `None` if the result does not fit in a `Decimal`.
#[must_use]
pub fn to_litres(kilolitres: Decimal) -> Option<Decimal> {
    kilolitres.checked_mul(LITRES_PER_KILOLITRE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_to_kilolitres_rounds_to_two_places() {
        assert_eq!(to_kilolitres(dec!(1234.5)), dec!(1.23));
        assert_eq!(to_kilolitres(dec!(300)), dec!(0.3));
        assert_eq!(to_kilolitres(dec!(15000)), dec!(15));
        assert_eq!(to_kilolitres(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_to_kilolitres_uses_half_even() {
        // 0.125 -> 0.12, 0.135 -> 0.14
        assert_eq!(to_kilolitres(dec!(125)), dec!(0.12));
        assert_eq!(to_kilolitres(dec!(135)), dec!(0.14));
    }

    #[test]
    fn test_to_litres() {
        assert_eq!(to_litres(dec!(15)), Some(dec!(15000)));
        assert_eq!(to_litres(dec!(0.25)), Some(dec!(250)));
        assert_eq!(to_litres(Decimal::MAX), None);
    }
}
