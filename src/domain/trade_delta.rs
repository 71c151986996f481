//! Signed per-leg token deltas submitted to the curve.

use core::fmt;

use super::{Decimals, TokenAmount, TokenType};
use crate::error::RedeemError;

/// Change in circulating supply of each leg, in integer base units.
///
/// A redemption burns tokens, so the leg being redeemed carries a
/// negative delta and the other leg is zero.
///
/// # Examples
///
/// ```
/// use bonded_redeem::domain::{Decimals, TokenAmount, TokenType, TradeDelta};
///
/// let amount: TokenAmount = "10".parse().expect("numeric");
/// let d = Decimals::new(6).expect("valid");
/// let delta = TradeDelta::redemption(amount, TokenType::Growth, d).expect("fits");
/// assert_eq!(delta.tokens1(), -10_000_000);
/// assert_eq!(delta.tokens2(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TradeDelta {
    tokens1: i128,
    tokens2: i128,
}

impl TradeDelta {
    /// No change on either leg.
    pub const ZERO: Self = Self {
        tokens1: 0,
        tokens2: 0,
    };

    /// Builds the delta for redeeming `amount` of `token_type` at the given
    /// token precision. Digits beyond `decimals` are truncated.
    ///
    /// # Errors
    ///
    /// Returns [`RedeemError::Overflow`] if the scaled amount is out of range.
    pub fn redemption(
        amount: TokenAmount,
        token_type: TokenType,
        decimals: Decimals,
    ) -> Result<Self, RedeemError> {
        let burned = amount.to_base_units(decimals)?;
        let delta = burned
            .checked_neg()
            .ok_or(RedeemError::Overflow("trade delta negation"))?;
        Ok(match token_type {
            TokenType::Growth => Self {
                tokens1: delta,
                tokens2: 0,
            },
            TokenType::Interest => Self {
                tokens1: 0,
                tokens2: delta,
            },
        })
    }

    /// Delta applied to the growth token supply.
    #[must_use]
    pub const fn tokens1(&self) -> i128 {
        self.tokens1
    }

    /// Delta applied to the interest token supply.
    #[must_use]
    pub const fn tokens2(&self) -> i128 {
        self.tokens2
    }

    /// Delta applied to the given leg.
    #[must_use]
    pub const fn for_leg(&self, token_type: TokenType) -> i128 {
        match token_type {
            TokenType::Growth => self.tokens1,
            TokenType::Interest => self.tokens2,
        }
    }

    /// Returns `true` if neither leg changes.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.tokens1 == 0 && self.tokens2 == 0
    }
}

impl fmt::Display for TradeDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TradeDelta(tokens1={}, tokens2={})", self.tokens1, self.tokens2)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn amt(s: &str) -> TokenAmount {
        let Ok(a) = s.parse() else {
            panic!("bad amount {s}");
        };
        a
    }

    fn dec(d: u8) -> Decimals {
        let Ok(d) = Decimals::new(d) else {
            panic!("bad decimals");
        };
        d
    }

    #[test]
    fn growth_leg_negative() {
        let Ok(delta) = TradeDelta::redemption(amt("10"), TokenType::Growth, dec(6)) else {
            panic!("expected Ok");
        };
        assert_eq!(delta.tokens1(), -10_000_000);
        assert_eq!(delta.tokens2(), 0);
        assert_eq!(delta.for_leg(TokenType::Growth), -10_000_000);
    }

    #[test]
    fn interest_leg_negative() {
        let Ok(delta) = TradeDelta::redemption(amt("0.5"), TokenType::Interest, dec(9)) else {
            panic!("expected Ok");
        };
        assert_eq!(delta.tokens1(), 0);
        assert_eq!(delta.tokens2(), -500_000_000);
    }

    #[test]
    fn excess_precision_truncated() {
        let Ok(delta) = TradeDelta::redemption(amt("1.239"), TokenType::Growth, dec(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(delta.tokens1(), -123);
    }

    #[test]
    fn zero_amount_is_zero_delta() {
        let Ok(delta) = TradeDelta::redemption(TokenAmount::ZERO, TokenType::Growth, dec(6))
        else {
            panic!("expected Ok");
        };
        assert!(delta.is_zero());
        assert_eq!(delta, TradeDelta::ZERO);
    }

    #[test]
    fn display() {
        let Ok(delta) = TradeDelta::redemption(amt("1"), TokenType::Interest, dec(0)) else {
            panic!("expected Ok");
        };
        assert_eq!(delta.to_string(), "TradeDelta(tokens1=0, tokens2=-1)");
    }
}
