//! Recompute trigger set.

use crate::config::{CurveParameters, CurveState};
use crate::domain::{Decimals, Price, TokenAmount, TokenType};

/// Owned copy of every input the preview depends on.
///
/// Two snapshots compare equal exactly when a recompute would see the
/// same inputs, so the engine recomputes only on inequality.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerSnapshot {
    /// Parsed amount, `None` while empty or unparseable.
    pub amount: Option<TokenAmount>,
    /// Acting wallet address.
    pub active_wallet: Option<String>,
    /// Redemption destination (the curve address).
    pub address: Option<String>,
    /// Leg being redeemed.
    pub token_type: TokenType,
    /// Asset id of the redeemed token.
    pub asset: Option<String>,
    /// Precision of the redeemed token.
    pub decimals: Option<Decimals>,
    /// Tri-state validity flag.
    pub valid: Option<bool>,
    /// Curve parameters, once loaded.
    pub curve_params: Option<CurveParameters>,
    /// Curve state, once loaded.
    pub curve_state: Option<CurveState>,
    /// Oracle feed price.
    pub oracle_price: Option<Price>,
    /// Market price of the reserve asset.
    pub reserve_price: Option<Price>,
    /// Current tracked price `p2`.
    pub current_p2: Option<Price>,
    /// Redeemable supply; `None` means uncapped.
    pub supply: Option<TokenAmount>,
    /// Reserve symbol reported by the shell.
    pub reserve_asset_symbol: Option<String>,
}

impl TriggerSnapshot {
    /// An empty snapshot for the given leg.
    #[must_use]
    pub const fn new(token_type: TokenType) -> Self {
        Self {
            amount: None,
            active_wallet: None,
            address: None,
            token_type,
            asset: None,
            decimals: None,
            valid: None,
            curve_params: None,
            curve_state: None,
            oracle_price: None,
            reserve_price: None,
            current_p2: None,
            supply: None,
            reserve_asset_symbol: None,
        }
    }

    /// Returns `true` if `other` targets a different redemption
    /// (destination or leg).
    #[must_use]
    pub fn retargets(&self, other: &Self) -> bool {
        self.address != other.address || self.token_type != other.token_type
    }
}

/// A recompute scheduled against one snapshot.
///
/// Carries the generation it was issued at; a result whose generation is
/// no longer current is stale and must not be shown.
#[derive(Debug, Clone, PartialEq)]
pub struct RecomputeTicket {
    generation: u64,
    snapshot: TriggerSnapshot,
    price_inversed: bool,
}

impl RecomputeTicket {
    pub(crate) const fn new(generation: u64, snapshot: TriggerSnapshot, price_inversed: bool) -> Self {
        Self {
            generation,
            snapshot,
            price_inversed,
        }
    }

    /// Generation this ticket was issued at.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Inputs the recompute runs against.
    #[must_use]
    pub const fn snapshot(&self) -> &TriggerSnapshot {
        &self.snapshot
    }

    /// Whether prices are displayed as reciprocals.
    #[must_use]
    pub const fn price_inversed(&self) -> bool {
        self.price_inversed
    }
}
