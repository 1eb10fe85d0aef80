//! Money type for representing currency amounts
//!
//! Wraps a `rust_decimal::Decimal` so stored amounts keep whatever precision
//! the user typed. Rounding only happens when formatting for display.
//! Arithmetic saturates at the decimal range instead of panicking.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A monetary amount in the budget's currency
///
/// Serializes as a decimal string and deserializes from either a string or a
/// JSON number, so documents written by other clients still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

/// Largest amount accepted from user input, in whole units
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000;

impl Money {
    /// Create a Money amount from whole currency units
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use wedding_bells::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal value
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Whether the amount is larger than anything a form accepts
    pub fn exceeds_input_limit(&self) -> bool {
        self.0.abs() > Decimal::from(MAX_AMOUNT_UNITS)
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "1,250.00"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        let rest = rest.strip_prefix('$').unwrap_or(rest);
        let digits: String = rest.chars().filter(|c| *c != ',').collect();

        if digits.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let value = Decimal::from_str(&digits)
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Parse an optional amount, treating blank input as zero
    pub fn parse_or_zero(s: &str) -> Result<Self, MoneyParseError> {
        if s.trim().is_empty() {
            Ok(Self::zero())
        } else {
            Self::parse(s)
        }
    }

    /// Format rounded to whole currency units, e.g. `$12,500`
    pub fn format_whole(&self, symbol: &str) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{}{}{}", sign, symbol, group_thousands(&rounded.abs().trunc().to_string()))
    }

    /// Format with two decimal places and a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-{}{:.2}", symbol, rounded.abs())
        } else {
            format!("{}{:.2}", symbol, rounded.abs())
        }
    }

    /// Plain editable representation used to pre-populate forms
    pub fn to_input_string(&self) -> String {
        self.0.normalize().to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_units(500).to_string(), "$500.00");
    }

    #[test]
    fn test_format_whole() {
        assert_eq!(Money::from_units(12500).format_whole("$"), "$12,500");
        assert_eq!(Money::from_cents(99950).format_whole("$"), "$1,000");
        assert_eq!(Money::from_cents(-250050).format_whole("$"), "-$2,501");
        assert_eq!(Money::zero().format_whole("€"), "€0");
        assert_eq!(Money::from_cents(40).format_whole("$"), "$0");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("$10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("-10.50").unwrap(), Money::from_cents(-1050));
        assert_eq!(Money::parse("10").unwrap(), Money::from_units(10));
        assert_eq!(Money::parse("1,250.5").unwrap(), Money::from_cents(125050));
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12.5.1").is_err());
    }

    #[test]
    fn test_parse_keeps_precision() {
        let m = Money::parse("0.125").unwrap();
        assert_eq!(m.to_input_string(), "0.125");
        assert_eq!(m.to_string(), "$0.13");
    }

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(Money::parse_or_zero("  ").unwrap(), Money::zero());
        assert_eq!(Money::parse_or_zero("7").unwrap(), Money::from_units(7));
        assert!(Money::parse_or_zero("seven").is_err());
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_units(1000);
        let b = Money::from_units(500);
        assert_eq!(a + b, Money::from_units(1500));
        assert_eq!(a - b, Money::from_units(500));
        assert_eq!(-a, Money::from_units(-1000));

        let total: Money = vec![a, b, Money::from_cents(25)].into_iter().sum();
        assert_eq!(total, Money::from_cents(150025));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from(Decimal::MAX);
        assert_eq!(max + max, max);
        assert_eq!(-max - max, -max);

        let mut total = max;
        total += Money::from_units(1);
        assert_eq!(total, max);

        let total: Money = vec![max, max, Money::from_units(5)].into_iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn test_input_limit() {
        assert!(!Money::from_units(MAX_AMOUNT_UNITS).exceeds_input_limit());
        assert!(Money::from_units(MAX_AMOUNT_UNITS + 1).exceeds_input_limit());
        assert!(Money::parse("79228162514264337593543950335")
            .unwrap()
            .exceeds_input_limit());
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_units(1).is_positive());
        assert!(Money::from_units(-1).is_negative());
    }

    #[test]
    fn test_deserialize_from_number_or_string() {
        let from_number: Money = serde_json::from_str("500").unwrap();
        let from_string: Money = serde_json::from_str("\"500\"").unwrap();
        assert_eq!(from_number, Money::from_units(500));
        assert_eq!(from_string, Money::from_units(500));
    }
}
