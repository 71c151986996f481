//! Token decimal places.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RedeemError;

/// Maximum allowed decimal places.
///
/// Bounded so that `10^decimals` fits a `u64` and a scaled 96-bit
/// [`Decimal`] mantissa still has room for the integer part.
const MAX_DECIMALS: u8 = 18;

/// Number of fractional digits of a token (or of the reserve asset).
///
/// Valid range is `0..=18`. Construction is validated.
///
/// # Examples
///
/// ```
/// use bonded_redeem::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.get(), 6);
/// assert_eq!(d.factor(), 1_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Maximum supported decimal places (18).
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`RedeemError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, RedeemError> {
        if value > MAX_DECIMALS {
            return Err(RedeemError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`.
    #[must_use]
    pub const fn factor(&self) -> u64 {
        10u64.pow(self.0 as u32)
    }

    /// Returns the smallest representable unit, `10^-decimals`.
    ///
    /// This is the inclusive lower bound of any redeemable amount.
    #[must_use]
    pub fn smallest_unit(&self) -> Decimal {
        Decimal::new(1, u32::from(self.0))
    }

    /// Converts a human-readable amount to integer base units, truncating
    /// any digits beyond this precision toward zero.
    ///
    /// Truncation guarantees the scaled amount never exceeds what was
    /// entered.
    ///
    /// # Errors
    ///
    /// Returns [`RedeemError::Overflow`] if the scaled value does not fit
    /// the decimal mantissa.
    pub fn to_base_units(&self, amount: Decimal) -> Result<i128, RedeemError> {
        let scaled = amount
            .checked_mul(Decimal::from(self.factor()))
            .ok_or(RedeemError::Overflow("amount scaled to base units"))?;
        let mut whole = scaled.trunc();
        whole.rescale(0);
        Ok(whole.mantissa())
    }

    /// Converts integer base units back to a decimal with exactly this
    /// many fractional digits.
    ///
    /// # Errors
    ///
    /// Returns [`RedeemError::Overflow`] if `raw` exceeds the 96-bit
    /// decimal mantissa.
    pub fn from_base_units(&self, raw: i128) -> Result<Decimal, RedeemError> {
        Decimal::try_from_i128_with_scale(raw, u32::from(self.0))
            .map_err(|_| RedeemError::Overflow("base units exceed decimal range"))
    }
}

impl TryFrom<u8> for Decimals {
    type Error = RedeemError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(d: Decimals) -> Self {
        d.0
    }
}
