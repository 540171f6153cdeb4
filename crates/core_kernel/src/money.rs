//! Money with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//!
//! The system bills in a single currency (BRL), so `Money` carries no
//! currency axis. Amounts are stored with 2 decimal places. Stored records
//! only ever hold non-negative amounts (enforced at the input boundary),
//! but `Money` itself is signed so that derived figures such as net profit
//! can go below zero.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

/// A monetary amount with 2-decimal semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value, rounded and rescaled to exactly 2
    /// decimal places so amounts always render as `123.45`
    pub fn new(amount: Decimal) -> Self {
        let mut amount = amount.round_dp(2);
        amount.rescale(2);
        Self(amount)
    }

    /// Creates Money from an integer amount in centavos
    pub fn from_centavos(centavos: i64) -> Self {
        Self(Decimal::new(centavos, 2))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self(dec!(0.00))
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R$ {:.2}", self.0)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rounds_to_two_decimal_places() {
        let m = Money::new(dec!(10.006));
        assert_eq!(m.amount(), dec!(10.01));
    }

    #[test]
    fn from_centavos() {
        assert_eq!(Money::from_centavos(15050).amount(), dec!(150.50));
    }

    #[test]
    fn subtraction_can_go_negative() {
        let net = Money::new(dec!(100)) - Money::new(dec!(250));
        assert!(net.is_negative());
        assert_eq!(net.amount(), dec!(-150));
    }

    #[test]
    fn sum_over_iterator() {
        let total: Money = [dec!(1.10), dec!(2.20), dec!(3.30)]
            .into_iter()
            .map(Money::new)
            .sum();
        assert_eq!(total.amount(), dec!(6.60));
    }

    #[test]
    fn display_formats_as_brl() {
        assert_eq!(Money::new(dec!(1250.5)).to_string(), "R$ 1250.50");
    }

    #[test]
    fn serde_is_transparent() {
        let m = Money::new(dec!(99.90));
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"99.90\"");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
