//! Fixed-point monetary amount with 2 decimal places precision.
//!
//! The machine supports exactly one currency, so the currency code is part
//! of the type's display rather than its state.

use crate::error::{AtmError, Result};
use rust_decimal::Decimal;
use std::fmt;
use std::ops::SubAssign;
use std::str::FromStr;

/// A monetary amount that maintains exactly 2 decimal places of precision.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use cli_atm::Amount;
///
/// let amount = Amount::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.50 NGN");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// The default and only supported currency.
    pub const CURRENCY: &'static str = "NGN";

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates a new `Amount` from a `Decimal`, normalizing to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Amount(normalized)
    }

    /// Returns `true` if this amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Adds two amounts, returning `None` if the sum does not fit.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount::new)
    }

    /// Parses a transaction amount typed by the user.
    ///
    /// Non-numeric input is a `ParseError`; a number that is zero or
    /// negative once normalized to 2 decimal places is an `InvalidAmount`.
    pub fn parse_positive(token: &str) -> Result<Self> {
        let amount =
            Amount::from_str(token).map_err(|_| AtmError::ParseError(token.trim().to_string()))?;
        if !amount.is_positive() {
            return Err(AtmError::InvalidAmount(amount));
        }
        Ok(amount)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount::new(Decimal::from(value))
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Amount::new(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.0, Self::CURRENCY)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
        self.0.rescale(Self::SCALE);
    }
}
