//! Money value object for rupee amounts.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A non-negative monetary amount in Indian rupees.
///
/// Stored as a `Decimal` so `pieces × unit price` is exact. Display never
/// rounds: the stored precision is kept, trailing zeros are dropped, and the
/// integer part uses Indian (en-IN) digit grouping (`₹12,34,567.5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl ValueObject for Money {}

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Currency symbol used for display.
    pub const SYMBOL: &'static str = "₹";

    /// Wrap a decimal amount, rejecting negatives.
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::validation("amount cannot be negative"));
        }
        if amount.is_zero() {
            return Ok(Self::ZERO);
        }
        Ok(Self(amount))
    }

    /// Whole rupees.
    pub fn from_rupees(rupees: u64) -> Self {
        Self(Decimal::from(rupees))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Decimal places needed to write the amount, ignoring trailing zeros.
    pub fn decimal_places(&self) -> u32 {
        self.0.normalize().scale()
    }

    /// Multiply by a piece count.
    ///
    /// `None` if the exact product does not fit a `Decimal`, including the
    /// case where `rust_decimal` would have to round away fraction digits.
    pub fn checked_times(&self, pieces: u64) -> Option<Self> {
        let product = self.0.checked_mul(Decimal::from(pieces))?;
        if product.scale() < self.0.scale() {
            return None;
        }
        Some(Self(product))
    }

    /// Amount without the currency symbol, e.g. `1,23,456.5`.
    pub fn grouped(&self) -> String {
        let text = self.0.normalize().to_string();
        let (sign, unsigned) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.as_str()),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (unsigned, None),
        };

        let mut out = String::with_capacity(text.len() + 8);
        out.push_str(sign);
        out.push_str(&group_indian(int_part));
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out
    }
}

/// en-IN grouping: last three digits, then pairs (`1234567` -> `12,34,567`).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::SYMBOL, self.grouped())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let amount = Decimal::from_str(trimmed)
            .map_err(|_| DomainError::validation(format!("'{trimmed}' is not a valid amount")))?;

        // rust_decimal rounds inputs longer than 28 digits instead of failing
        let written_places = trimmed
            .split_once('.')
            .map_or(0, |(_, frac)| frac.chars().filter(char::is_ascii_digit).count());
        if amount.scale() as usize != written_places {
            return Err(DomainError::validation(format!(
                "'{trimmed}' has more digits than can be stored exactly"
            )));
        }
        Self::new(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn display_uses_indian_grouping() {
        assert_eq!(Money::from_rupees(0).to_string(), "₹0");
        assert_eq!(Money::from_rupees(999).to_string(), "₹999");
        assert_eq!(Money::from_rupees(6000).to_string(), "₹6,000");
        assert_eq!(Money::from_rupees(123_456).to_string(), "₹1,23,456");
        assert_eq!(Money::from_rupees(12_345_678).to_string(), "₹1,23,45,678");
    }

    #[test]
    fn display_keeps_stored_fraction_without_rounding() {
        let m: Money = "123456.50".parse().unwrap();
        assert_eq!(m.grouped(), "1,23,456.5");
        let m: Money = "1295.125".parse().unwrap();
        assert_eq!(m.to_string(), "₹1,295.125");
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let err = "-1".parse::<Money>().unwrap_err();
        assert!(err.is_validation());
        assert_eq!("-0".parse::<Money>().unwrap(), Money::ZERO);
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        assert!("abc".parse::<Money>().unwrap_err().is_validation());
        assert!("".parse::<Money>().unwrap_err().is_validation());
    }

    #[test]
    fn checked_times_is_exact() {
        let m: Money = "0.1".parse().unwrap();
        assert_eq!(m.checked_times(3).unwrap(), "0.3".parse().unwrap());
    }

    #[test]
    fn checked_times_refuses_to_round() {
        let m: Money = "9999999.999999999999999999999".parse().unwrap();
        assert_eq!(m.checked_times(997 * 991), None);
    }

    #[test]
    fn overlong_input_is_rejected_not_rounded() {
        let err = "1.00000000000000000000000000009".parse::<Money>().unwrap_err();
        assert!(err.is_validation());
        assert_eq!("1.10".parse::<Money>().unwrap().decimal_places(), 1);
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&Money::from_rupees(8000)).unwrap();
        assert_eq!(json, "\"8000\"");
    }

    proptest! {
        /// Stripping the separators always gives back the plain integer.
        #[test]
        fn grouping_preserves_digits(rupees in 0u64..10_000_000_000_000u64) {
            let grouped = Money::from_rupees(rupees).grouped();
            prop_assert_eq!(grouped.replace(',', ""), rupees.to_string());
        }
    }
}
