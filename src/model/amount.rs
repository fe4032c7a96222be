//! Amount type for handling monetary values.
//!
//! This module provides the `Amount` type which wraps `Decimal` so that totals are summed exactly.
//! It accepts both JSON numbers and numeric strings, because the web form posts the amount as
//! text while API clients send numbers.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// Represents an amount of money.
///
/// Serializes as a JSON number, which is a double: amounts with up to 15 significant digits
/// reload unchanged, longer ones come back rounded. Parses from strings that may contain thousands
/// separators.
///
/// # Examples
///
/// ```
/// # use expense_tracker::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("1,250.5").unwrap();
/// assert_eq!(amount.to_string(), "1,250.50");
/// ```
///
/// ```
/// # use expense_tracker::model::Amount;
/// let amount: Amount = serde_json::from_str("3.5").unwrap();
/// assert_eq!(serde_json::to_string(&amount).unwrap(), "3.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    pub const ZERO: Amount = Amount::new(Decimal::ZERO);

    pub const fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.value.is_sign_negative() && !self.value.is_zero()
    }

    /// The value as a float, for JSON output.
    pub fn to_f64(&self) -> f64 {
        self.value.to_f64().unwrap_or_default()
    }
}

/// An error that can occur when parsing strings into `Amount` values.
pub struct AmountError(rust_decimal::Error);

impl Debug for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid amount: {}", self.0)
    }
}

impl std::error::Error for AmountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Remove whitespace and thousands separators
        let cleaned = s.trim().replace(',', "");
        let value = Decimal::from_str(&cleaned)
            .or_else(|_| Decimal::from_scientific(&cleaned))
            .map_err(AmountError)?;
        Ok(Amount::new(value))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let num = self.value.abs().to_f64().unwrap_or_default();
        write!(f, "{sign}{}", format_num::format_num!(",.2", num))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.to_f64())
    }
}

/// The shapes an amount may take on the wire.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(serde_json::Number),
    Text(String),
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(n) => n.to_string(),
            RawAmount::Text(s) => s,
        };
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Self::Output {
        Amount::new(self.value + rhs.value)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_plain() {
        let amount = Amount::from_str("50.00").unwrap();
        assert_eq!(amount.value(), dec("50.00"));
    }

    #[test]
    fn test_parse_negative() {
        let amount = Amount::from_str("-50.25").unwrap();
        assert_eq!(amount.value(), dec("-50.25"));
        assert!(amount.is_negative());
    }

    #[test]
    fn test_parse_whitespace_and_commas() {
        let amount = Amount::from_str("  1,234,567.89 ").unwrap();
        assert_eq!(amount.value(), dec("1234567.89"));
    }

    #[test]
    fn test_parse_empty_string_fails() {
        assert!(Amount::from_str("").is_err());
        assert!(Amount::from_str("   ").is_err());
    }

    #[test]
    fn test_parse_garbage_fails() {
        let err = Amount::from_str("lots").unwrap_err();
        assert!(err.to_string().starts_with("Invalid amount"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(dec("50")).to_string(), "50.00");
        assert_eq!(Amount::new(dec("-1234.5")).to_string(), "-1,234.50");
        assert_eq!(Amount::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_serialize_as_number() {
        let amount = Amount::new(dec("3.50"));
        let value = serde_json::to_value(amount).unwrap();
        assert_eq!(value.as_f64(), Some(3.5));
    }

    #[test]
    fn test_reload_precision() {
        let reload = |s: &str| {
            let json = serde_json::to_string(&Amount::from_str(s).unwrap()).unwrap();
            serde_json::from_str::<Amount>(&json).unwrap().value()
        };
        assert_eq!(reload("9876543.21"), dec("9876543.21"));
        assert_eq!(reload("0.07"), dec("0.07"));
        assert_eq!(reload("-19.99"), dec("-19.99"));
        // Past the precision of a double the value is rounded
        assert_ne!(reload("12345678901234567.89"), dec("12345678901234567.89"));
    }

    #[test]
    fn test_deserialize_number() {
        let amount: Amount = serde_json::from_str("3.5").unwrap();
        assert_eq!(amount.value(), dec("3.5"));
        let amount: Amount = serde_json::from_str("10").unwrap();
        assert_eq!(amount.value(), dec("10"));
    }

    #[test]
    fn test_deserialize_string() {
        let amount: Amount = serde_json::from_str("\"12.75\"").unwrap();
        assert_eq!(amount.value(), dec("12.75"));
    }

    #[test]
    fn test_deserialize_rejects_other_types() {
        assert!(serde_json::from_str::<Amount>("true").is_err());
        assert!(serde_json::from_str::<Amount>("\"abc\"").is_err());
    }

    #[test]
    fn test_sum_is_exact() {
        let amounts = vec![
            Amount::from_str("0.1").unwrap(),
            Amount::from_str("0.2").unwrap(),
        ];
        let total: Amount = amounts.iter().sum();
        assert_eq!(total.value(), dec("0.3"));
    }

    #[test]
    fn test_add_assign() {
        let mut a = Amount::from_str("3.5").unwrap();
        a += Amount::from_str("10").unwrap();
        assert_eq!(a.value(), dec("13.5"));
    }
}
