//! Curve price in reserve units.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RedeemError;

/// A price reported by the bonding curve or an oracle feed.
///
/// Wraps an `f64` that must be finite and non-negative. Curves may quote
/// the tracked second-asset price in either orientation; see
/// [`oriented`](Self::oriented) for flipping into the displayed one.
///
/// # Examples
///
/// ```
/// use bonded_redeem::domain::Price;
///
/// let p = Price::new(4.0).expect("finite");
/// assert_eq!(p.inverse().expect("non-zero").get(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Price of one.
    pub const ONE: Self = Self(1.0);

    /// Price of zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Price`.
    ///
    /// # Errors
    ///
    /// Returns [`RedeemError::InvalidPrice`] if the value is negative, NaN,
    /// or infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(RedeemError::InvalidPrice(
                "price must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the price is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Computes the reciprocal price (`1 / self`).
    ///
    /// # Errors
    ///
    /// Returns [`RedeemError::DivisionByZero`] if the price is zero.
    /// Returns [`RedeemError::InvalidPrice`] if the reciprocal is not finite.
    pub fn inverse(&self) -> crate::error::Result<Self> {
        if self.is_zero() {
            return Err(RedeemError::DivisionByZero);
        }
        Self::new(1.0 / self.0)
    }

    /// Returns the price in display orientation: the reciprocal when
    /// `inversed`, unchanged otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`inverse`](Self::inverse) when `inversed` is `true`.
    pub fn oriented(&self, inversed: bool) -> crate::error::Result<Self> {
        if inversed {
            self.inverse()
        } else {
            Ok(*self)
        }
    }
}

impl TryFrom<f64> for Price {
    type Error = RedeemError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(p: Price) -> Self {
        p.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
