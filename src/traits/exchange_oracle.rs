//! Bonding-curve pricing boundary.
//!
//! [`ExchangeOracle`] is the single seam between the preview engine and
//! the curve math. The engine builds an [`ExchangeRequest`] from the form
//! inputs and interprets the answer; it never looks inside the formula.
//!
//! # Contract
//!
//! - Pure and synchronous: the same request yields the same answer.
//! - `None` means the curve refuses the trade (for instance because it
//!   would push the price past a guard). This is distinct from the engine
//!   not asking at all because parameters are missing.
//! - When an outcome carries `p2`/`target_p2`, those prices are non-zero,
//!   and the shell-supplied current `p2` is non-zero as well. Zero
//!   reference prices are a fault of the curve data, not of the trade.

use crate::config::{CurveParameters, CurveState};
use crate::domain::{ExchangeOutcome, Price, TradeDelta};

/// Everything the curve needs to price one trade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRequest<'a> {
    /// Signed supply change of each leg, in base units.
    pub trade_delta: TradeDelta,
    /// Curve parameters.
    pub params: &'a CurveParameters,
    /// Current curve state.
    pub state: &'a CurveState,
    /// Latest oracle price, if the feed has posted.
    pub oracle_price: Option<Price>,
    /// Market price of the reserve asset, if known.
    pub reserve_price: Option<Price>,
    /// Unix timestamp (seconds) the trade is priced at.
    pub timestamp: u64,
}

/// Prices a trade against the bonding curve.
///
/// Implemented for any `Fn(&ExchangeRequest<'_>) -> Option<ExchangeOutcome>`
/// so a closure can stand in for the curve.
pub trait ExchangeOracle {
    /// Returns the curve's outcome for the request, or `None` if the curve
    /// rejects the trade.
    fn exchange_result(&self, request: &ExchangeRequest<'_>) -> Option<ExchangeOutcome>;
}

impl<F> ExchangeOracle for F
where
    F: Fn(&ExchangeRequest<'_>) -> Option<ExchangeOutcome>,
{
    fn exchange_result(&self, request: &ExchangeRequest<'_>) -> Option<ExchangeOutcome> {
        self(request)
    }
}
