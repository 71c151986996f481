//! Price movement caused by a redemption.

use tracing::error;

use crate::domain::{ExchangeOutcome, Price};
use crate::error::RedeemError;

/// How far a redemption moves the tracked price, in display orientation.
///
/// Only curves that expose a tracked price (`p2`) yield an impact; for the
/// rest every figure is zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceImpact {
    price_change: f64,
    price_change_percent: f64,
    target_deviation_percent: f64,
    final_price: Option<Price>,
}

impl PriceImpact {
    /// Computes the impact of `outcome` relative to the current price.
    ///
    /// With `inversed`, every price is replaced by its reciprocal before
    /// comparison:
    ///
    /// ```text
    /// price_change             = inv(p2) - inv(current_p2)
    /// price_change_percent     = price_change / inv(current_p2) * 100
    /// target_deviation_percent = (inv(p2) - inv(target_p2)) / inv(target_p2) * 100
    /// ```
    ///
    /// The target deviation stays zero when the outcome has no target.
    ///
    /// # Errors
    ///
    /// Returns [`RedeemError::ConfigurationFault`] if a reference price is
    /// zero or missing while the outcome carries a tracked price.
    pub fn compute(
        outcome: &ExchangeOutcome,
        current_p2: Option<Price>,
        inversed: bool,
    ) -> crate::error::Result<Self> {
        let Some(p2) = outcome.p2() else {
            return Ok(Self::default());
        };
        let new_p2 = orient(p2, inversed, "tracked price after trade is zero")?;
        let current = current_p2.ok_or(RedeemError::ConfigurationFault(
            "current tracked price unavailable",
        ))?;
        let old_p2 = orient(current, inversed, "current tracked price is zero")?;
        if old_p2.is_zero() {
            return Err(RedeemError::ConfigurationFault("current tracked price is zero"));
        }

        let price_change = new_p2.get() - old_p2.get();
        let price_change_percent = price_change / old_p2.get() * 100.0;

        let target_deviation_percent = match outcome.target_p2() {
            Some(target) => {
                let t_p2 = orient(target, inversed, "target price is zero")?;
                if t_p2.is_zero() {
                    return Err(RedeemError::ConfigurationFault("target price is zero"));
                }
                (new_p2.get() - t_p2.get()) / t_p2.get() * 100.0
            }
            None => 0.0,
        };

        Ok(Self {
            price_change,
            price_change_percent,
            target_deviation_percent,
            final_price: Some(new_p2),
        })
    }

    /// Like [`compute`](Self::compute), but a configuration fault is
    /// logged and yields `None` instead of an error.
    #[must_use]
    pub fn compute_or_log(
        outcome: &ExchangeOutcome,
        current_p2: Option<Price>,
        inversed: bool,
    ) -> Option<Self> {
        match Self::compute(outcome, current_p2, inversed) {
            Ok(impact) => Some(impact),
            Err(e) => {
                error!(error = %e, "price impact not computable");
                None
            }
        }
    }

    /// Absolute change of the displayed price.
    #[must_use]
    pub const fn price_change(&self) -> f64 {
        self.price_change
    }

    /// Relative change of the displayed price, in percent.
    #[must_use]
    pub const fn price_change_percent(&self) -> f64 {
        self.price_change_percent
    }

    /// Deviation of the final price from the target, in percent.
    #[must_use]
    pub const fn target_deviation_percent(&self) -> f64 {
        self.target_deviation_percent
    }

    /// Displayed price after the trade, if the curve tracks one.
    #[must_use]
    pub const fn final_price(&self) -> Option<Price> {
        self.final_price
    }
}

fn orient(price: Price, inversed: bool, fault: &'static str) -> crate::error::Result<Price> {
    price.oriented(inversed).map_err(|e| match e {
        RedeemError::DivisionByZero => RedeemError::ConfigurationFault(fault),
        other => other,
    })
}
