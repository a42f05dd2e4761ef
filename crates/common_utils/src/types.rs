//! Types that can be used in other crates

use std::fmt::Display;

use error_stack::report;
use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{
    consts,
    errors::{AmountConversionError, CustomResult},
};

/// This Unit struct represents MinorUnit in which core amount works
///
/// Gateways exchange amounts as integers in 1/100 of the currency's major unit.
#[derive(
    Default, Debug, serde::Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct MinorUnit(i64);

impl MinorUnit {
    /// gets amount as i64 value
    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }

    /// forms a new minor unit from amount
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// zero amount
    pub fn zero() -> Self {
        Self(0)
    }

    /// Converts a major-unit decimal amount into minor units.
    ///
    /// The amount is scaled by 100, rounded half away from zero and must fit into a 32-bit
    /// signed integer.
    pub fn from_major_unit(amount: Decimal) -> CustomResult<Self, AmountConversionError> {
        amount
            .checked_mul(Decimal::from(consts::MINOR_UNITS_PER_MAJOR_UNIT))
            .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|rounded| rounded.to_i32())
            .map(|minor| Self(i64::from(minor)))
            .ok_or_else(|| report!(AmountConversionError::OverflowError))
            .map_err(|error| error.attach_printable(format!("amount: {amount}")))
    }

    /// Converts minor units back into an exact major-unit decimal amount.
    pub fn to_major_unit(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Adds two amounts, returning `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Whether the amount is strictly positive
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl Display for MinorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for MinorUnit {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

/// Deserialize helper for the minor unit amounts of gateways which may send `null`
pub fn deserialize_nullable_minor_unit<'de, D>(deserializer: D) -> Result<MinorUnit, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(|value| MinorUnit(value.unwrap_or_default()))
}

#[cfg(test)]
mod amount_conversion_tests {
    #![allow(clippy::unwrap_used)]

    use std::str::FromStr;

    use proptest::prelude::*;
    use test_case::test_case;

    use super::*;

    fn decimal(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test_case("100.00", 10000; "whole amount")]
    #[test_case("101.5", 10150; "single decimal")]
    #[test_case("0.005", 1; "half rounds away from zero")]
    #[test_case("-0.005", -1; "negative half rounds away from zero")]
    #[test_case("1.234", 123; "below half rounds down")]
    #[test_case("21474836.47", 2147483647; "largest representable amount")]
    fn converts_major_to_minor_units(amount: &str, expected: i64) {
        assert_eq!(
            MinorUnit::from_major_unit(decimal(amount)).unwrap(),
            MinorUnit::new(expected)
        );
    }

    #[test_case("21474836.48"; "one past the maximum")]
    #[test_case("-21474836.49"; "one past the minimum")]
    #[test_case("79228162514264337593543950335"; "decimal maximum")]
    fn rejects_amounts_outside_the_32_bit_range(amount: &str) {
        let error = MinorUnit::from_major_unit(decimal(amount)).unwrap_err();

        assert_eq!(
            error.current_context(),
            &AmountConversionError::OverflowError
        );
    }

    #[test]
    fn minor_to_major_is_exact() {
        assert_eq!(MinorUnit::new(10150).to_major_unit(), decimal("101.50"));
        assert_eq!(MinorUnit::new(150).to_major_unit(), decimal("1.5"));
        assert_eq!(MinorUnit::zero().to_major_unit(), Decimal::ZERO);
    }

    #[test]
    fn nullable_amounts_default_to_zero() {
        #[derive(Deserialize)]
        struct Totals {
            #[serde(deserialize_with = "deserialize_nullable_minor_unit")]
            authorized: MinorUnit,
        }

        let totals: Totals = serde_json::from_str(r#"{"authorized":null}"#).unwrap();
        assert_eq!(totals.authorized, MinorUnit::zero());
    }

    proptest! {
        #[test]
        fn major_minor_round_trip(minor in 0_i64..=i64::from(i32::MAX)) {
            let amount = Decimal::new(minor, 2);
            let converted = MinorUnit::from_major_unit(amount).unwrap();

            prop_assert_eq!(converted.get_amount_as_i64(), minor);
            prop_assert_eq!(converted.to_major_unit(), amount);
        }
    }
}
