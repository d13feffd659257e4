//! Fixed-point monetary amounts using decimal arithmetic.
//!
//! All storefront pricing goes through [`Money`] rather than binary floats,
//! so repeated totals recomputation is exact. Display formatting rounds to
//! two decimal places, half away from zero.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A USD monetary amount.
///
/// Internally a `rust_decimal::Decimal`, so arithmetic over cent-level
/// prices never accumulates binary rounding error. Values are not forced
/// to two decimal places; intermediate results (e.g. an 8% tax on an odd
/// subtotal) keep full precision until [`Money::rounded`] is called.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a money value from a raw decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a money value from a whole number of cents.
    ///
    /// `Money::from_cents(1299)` is $12.99.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether this amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Round to two decimal places, half away from zero.
    ///
    /// This is the display/settlement rounding rule; raw values keep full
    /// precision so downstream arithmetic stays exact.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// The amount in whole cents, after display rounding.
    #[must_use]
    pub fn cents(&self) -> i64 {
        (self.rounded().0 * Decimal::ONE_HUNDRED)
            .to_i64()
            .unwrap_or(i64::MAX)
    }

    /// Multiply by a fractional rate (e.g. a tax or discount rate).
    #[must_use]
    pub fn mul_rate(self, rate: Decimal) -> Self {
        Self(self.0 * rate)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.rounded().0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Money::from_cents(1299);
        assert_eq!(price.amount(), Decimal::new(1299, 2));
        assert_eq!(price.cents(), 1299);
    }

    #[test]
    fn test_zero() {
        assert!(Money::ZERO.is_zero());
        assert_eq!(Money::ZERO + Money::ZERO, Money::ZERO);
    }

    #[test]
    fn test_quantity_multiplication_is_exact() {
        // 3 x $19.99 must be exactly $59.97, never 59.970000000000006
        let line = Money::from_cents(1999) * 3;
        assert_eq!(line, Money::from_cents(5997));
    }

    #[test]
    fn test_add_sub() {
        let a = Money::from_cents(1299);
        let b = Money::from_cents(2499);
        assert_eq!(a + b, Money::from_cents(3798));
        assert_eq!(b - a, Money::from_cents(1200));
    }

    #[test]
    fn test_mul_rate_keeps_precision() {
        // 8% of $70.96 is 5.6768 - full precision until rounded
        let tax = Money::from_cents(7096).mul_rate(Decimal::new(8, 2));
        assert_eq!(tax.amount(), Decimal::new(56768, 4));
        assert_eq!(tax.rounded(), Money::from_cents(568));
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        let m = Money::new(Decimal::new(12345, 3)); // 12.345
        assert_eq!(m.rounded(), Money::from_cents(1235));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(599).to_string(), "$5.99");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
        // Display rounds, raw value keeps precision
        assert_eq!(Money::new(Decimal::new(56768, 4)).to_string(), "$5.68");
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_cents(100), Money::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(350));
    }

    #[test]
    fn test_ordering() {
        assert!(Money::from_cents(5001) > Money::from_cents(5000));
        assert!(Money::from_cents(4999) < Money::from_cents(5000));
    }

    #[test]
    fn test_serde_roundtrip() {
        let price = Money::from_cents(2499);
        let json = serde_json::to_string(&price).unwrap();
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}
