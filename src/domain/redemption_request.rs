//! Immutable input to one preview recomputation.

use super::{Decimals, TokenAmount, TokenType, TradeDelta};
use crate::error::RedeemError;

/// A redemption the user is considering.
///
/// Created from the form inputs on each recompute; it never changes after
/// construction.
///
/// # Examples
///
/// ```
/// use bonded_redeem::domain::{Decimals, RedemptionRequest, TokenType};
///
/// let req = RedemptionRequest::new(
///     "10".parse().expect("numeric"),
///     TokenType::Growth,
///     Decimals::new(6).expect("valid"),
///     Decimals::new(2).expect("valid"),
/// );
/// assert_eq!(req.amount_in_base_units().expect("fits"), 10_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RedemptionRequest {
    token_amount: TokenAmount,
    token_type: TokenType,
    decimals: Decimals,
    reserve_asset_decimals: Decimals,
}

impl RedemptionRequest {
    /// Creates a new request.
    #[must_use]
    pub const fn new(
        token_amount: TokenAmount,
        token_type: TokenType,
        decimals: Decimals,
        reserve_asset_decimals: Decimals,
    ) -> Self {
        Self {
            token_amount,
            token_type,
            decimals,
            reserve_asset_decimals,
        }
    }

    /// Amount of tokens being redeemed.
    #[must_use]
    pub const fn token_amount(&self) -> TokenAmount {
        self.token_amount
    }

    /// Leg being redeemed.
    #[must_use]
    pub const fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Precision of the redeemed token.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Precision of the reserve asset paid out.
    #[must_use]
    pub const fn reserve_asset_decimals(&self) -> Decimals {
        self.reserve_asset_decimals
    }

    /// Signed curve delta for this redemption.
    ///
    /// # Errors
    ///
    /// Returns [`RedeemError::Overflow`] if the scaled amount is out of range.
    pub fn trade_delta(&self) -> Result<TradeDelta, RedeemError> {
        TradeDelta::redemption(self.token_amount, self.token_type, self.decimals)
    }

    /// Integer on-chain amount, truncated so it never exceeds what was
    /// previewed.
    ///
    /// # Errors
    ///
    /// Returns [`RedeemError::Overflow`] if the scaled amount is out of range.
    pub fn amount_in_base_units(&self) -> Result<u128, RedeemError> {
        let raw = self.token_amount.to_base_units(self.decimals)?;
        u128::try_from(raw).map_err(|_| RedeemError::Overflow("negative base-unit amount"))
    }
}
