//! Notifications the shell sends to a [`RedeemForm`](super::RedeemForm).

use crate::config::{CurveParameters, CurveState};
use crate::domain::{Price, TokenAmount, TokenType};

/// One change observed by the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// The user edited the amount field.
    AmountChanged {
        /// Field contents as typed.
        raw: String,
    },
    /// The acting wallet changed (or disconnected).
    WalletChanged {
        /// Wallet address.
        wallet: Option<String>,
    },
    /// The form now redeems a different curve or leg.
    TargetChanged {
        /// Curve address.
        address: String,
        /// Leg to redeem.
        token_type: TokenType,
    },
    /// Curve parameters were (re)loaded.
    CurveParamsChanged {
        /// New parameters.
        params: Option<CurveParameters>,
    },
    /// Curve state was refreshed.
    CurveStateChanged {
        /// New state.
        state: Option<CurveState>,
    },
    /// The oracle feed posted.
    OraclePriceChanged {
        /// Feed value.
        price: Option<Price>,
    },
    /// The reserve market price moved.
    ReservePriceChanged {
        /// Market price.
        price: Option<Price>,
    },
    /// The current tracked price moved.
    CurrentPriceChanged {
        /// Tracked price `p2`.
        p2: Option<Price>,
    },
    /// The redeemable supply changed.
    SupplyChanged {
        /// Supply of the current leg.
        supply: Option<TokenAmount>,
    },
    /// Display symbols resolved.
    SymbolsChanged {
        /// Symbol of the redeemed token.
        symbol: Option<String>,
        /// Symbol of the reserve asset.
        reserve_asset_symbol: Option<String>,
    },
}

impl FormEvent {
    /// Short name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AmountChanged { .. } => "amount",
            Self::WalletChanged { .. } => "wallet",
            Self::TargetChanged { .. } => "target",
            Self::CurveParamsChanged { .. } => "curve_params",
            Self::CurveStateChanged { .. } => "curve_state",
            Self::OraclePriceChanged { .. } => "oracle_price",
            Self::ReservePriceChanged { .. } => "reserve_price",
            Self::CurrentPriceChanged { .. } => "current_p2",
            Self::SupplyChanged { .. } => "supply",
            Self::SymbolsChanged { .. } => "symbols",
        }
    }
}
