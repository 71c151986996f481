//! Bounds an entered amount must satisfy.

use rust_decimal::Decimal;

use crate::domain::{Decimals, TokenAmount};
use crate::error::RedeemError;

/// Numeric constraints on an amount field.
///
/// Both bounds are inclusive.
///
/// # Examples
///
/// ```
/// use bonded_redeem::domain::{Decimals, TokenAmount};
/// use bonded_redeem::validation::ValidationConstraints;
///
/// let supply: TokenAmount = "100".parse().expect("numeric");
/// let c = ValidationConstraints::for_redemption(Decimals::new(6).expect("valid"), Some(supply));
/// assert_eq!(c.min_value().to_string(), "0.000001");
/// assert_eq!(c.max_decimals(), Some(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidationConstraints {
    min_value: Decimal,
    max_value: Option<Decimal>,
    max_decimals: Option<u32>,
}

impl ValidationConstraints {
    /// Creates constraints from explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns [`RedeemError::InvalidConfiguration`] if `max_value` is
    /// below `min_value`.
    pub fn new(
        min_value: Decimal,
        max_value: Option<Decimal>,
        max_decimals: Option<u32>,
    ) -> crate::error::Result<Self> {
        if matches!(max_value, Some(max) if max < min_value) {
            return Err(RedeemError::InvalidConfiguration(
                "max_value must not be below min_value",
            ));
        }
        Ok(Self {
            min_value,
            max_value,
            max_decimals,
        })
    }

    /// Constraints for redeeming a token of the given precision: at least
    /// one base unit, at most `supply` (unbounded while unknown), and no
    /// more fractional digits than the token has.
    #[must_use]
    pub fn for_redemption(decimals: Decimals, supply: Option<TokenAmount>) -> Self {
        Self {
            min_value: decimals.smallest_unit(),
            max_value: supply.map(|s| s.get()),
            max_decimals: Some(u32::from(decimals.get())),
        }
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn min_value(&self) -> Decimal {
        self.min_value
    }

    /// Inclusive upper bound, if any.
    #[must_use]
    pub const fn max_value(&self) -> Option<Decimal> {
        self.max_value
    }

    /// Maximum fractional digits, if limited.
    #[must_use]
    pub const fn max_decimals(&self) -> Option<u32> {
        self.max_decimals
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_bounds() {
        let r = ValidationConstraints::new(Decimal::TEN, Some(Decimal::ONE), None);
        assert!(r.is_err());
    }

    #[test]
    fn equal_bounds_allowed() {
        let r = ValidationConstraints::new(Decimal::ONE, Some(Decimal::ONE), Some(0));
        assert!(r.is_ok());
    }

    #[test]
    fn redemption_without_supply_is_unbounded() {
        let Ok(d) = Decimals::new(2) else {
            panic!("expected Ok");
        };
        let c = ValidationConstraints::for_redemption(d, None);
        assert!(c.max_value().is_none());
        assert_eq!(c.min_value(), Decimal::new(1, 2));
        assert_eq!(c.max_decimals(), Some(2));
    }
}
