//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use bonded_redeem::prelude::*;
//! ```

pub use crate::config::{CurveParameters, CurveState, RedeemConfig};
pub use crate::domain::{
    Decimals, ExchangeOutcome, ExchangeQuote, Price, RedemptionRequest, TokenAmount, TokenType,
    TradeDelta,
};
pub use crate::engine::{FormEvent, PreviewEngine, PreviewState, PreviewText, RedeemForm};
pub use crate::error::{RedeemError, Result};
pub use crate::traits::{Clock, ExchangeOracle, ExchangeRequest, LinkBuilder};
pub use crate::validation::{InputValidator, Validation, ValidationConstraints};

#[cfg(feature = "deep-link")]
pub use crate::traits::WalletLinkBuilder;

#[cfg(feature = "locale")]
pub use crate::locale::{Locale, LocaleRouter, Navigator};
