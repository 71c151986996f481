//! Human-readable token quantity.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;

use super::Decimals;
use crate::error::RedeemError;

/// A non-negative token quantity in display units (e.g. `10.5` tokens).
///
/// Backed by an exact [`Decimal`] so that user-entered amounts survive
/// parsing and scaling without binary rounding.
///
/// # Examples
///
/// ```
/// use bonded_redeem::domain::{Decimals, TokenAmount};
///
/// let amount: TokenAmount = "10.25".parse().expect("numeric");
/// let d = Decimals::new(6).expect("valid");
/// assert_eq!(amount.to_base_units(d).expect("fits"), 10_250_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TokenAmount(Decimal);

impl TokenAmount {
    /// Zero tokens.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new `TokenAmount`.
    ///
    /// # Errors
    ///
    /// Returns [`RedeemError::InvalidAmount`] if `value` is negative.
    pub fn new(value: Decimal) -> Result<Self, RedeemError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(RedeemError::InvalidAmount("amount must be non-negative"));
        }
        Ok(Self(value))
    }

    /// Returns the underlying decimal.
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Number of significant fractional digits (trailing zeros ignored).
    #[must_use]
    pub fn fractional_digits(&self) -> u32 {
        self.0.normalize().scale()
    }

    /// Converts to integer base units at the given precision, truncating.
    ///
    /// # Errors
    ///
    /// Returns [`RedeemError::Overflow`] if the scaled value is out of range.
    pub fn to_base_units(&self, decimals: Decimals) -> Result<i128, RedeemError> {
        decimals.to_base_units(self.0)
    }
}

impl FromStr for TokenAmount {
    type Err = RedeemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|_| RedeemError::InvalidAmount("amount is not a number"))?;
        Self::new(value)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
