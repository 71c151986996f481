//! Result of asking the bonding curve to price a redemption.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Price;

/// What the curve would pay out for a trade, plus the optional
/// fee/reward and tracked-price figures some curves expose.
///
/// `payout` is in reserve-asset base units and may be negative when the
/// trade would move the price past what the curve can honour.
///
/// # Examples
///
/// ```
/// use bonded_redeem::domain::{ExchangeOutcome, Price};
///
/// let outcome = ExchangeOutcome::new(500_000)
///     .with_fee_percent(0.1234)
///     .with_p2(Price::new(1.02).expect("finite"));
/// assert_eq!(outcome.payout(), 500_000);
/// assert_eq!(outcome.fee_percent(), Some(0.1234));
/// assert!(outcome.reward_percent().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeOutcome {
    payout: i128,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fee_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reward_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    p2: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_p2: Option<Price>,
}

impl ExchangeOutcome {
    /// Creates an outcome carrying only a payout.
    #[must_use]
    pub const fn new(payout: i128) -> Self {
        Self {
            payout,
            fee_percent: None,
            reward_percent: None,
            p2: None,
            target_p2: None,
        }
    }

    /// Sets the fee charged, in percent.
    #[must_use]
    pub fn with_fee_percent(mut self, fee_percent: f64) -> Self {
        self.fee_percent = Some(fee_percent);
        self
    }

    /// Sets the reward granted, in percent.
    #[must_use]
    pub fn with_reward_percent(mut self, reward_percent: f64) -> Self {
        self.reward_percent = Some(reward_percent);
        self
    }

    /// Sets the tracked second-asset price after the trade.
    #[must_use]
    pub const fn with_p2(mut self, p2: Price) -> Self {
        self.p2 = Some(p2);
        self
    }

    /// Sets the curve's target (peg) price.
    #[must_use]
    pub const fn with_target_p2(mut self, target_p2: Price) -> Self {
        self.target_p2 = Some(target_p2);
        self
    }

    /// Reserve-asset payout in base units.
    #[must_use]
    pub const fn payout(&self) -> i128 {
        self.payout
    }

    /// Fee percent, when the curve reports one.
    #[must_use]
    pub fn fee_percent(&self) -> Option<f64> {
        self.fee_percent
    }

    /// Reward percent, when the curve reports one.
    #[must_use]
    pub fn reward_percent(&self) -> Option<f64> {
        self.reward_percent
    }

    /// Tracked price after the trade, when exposed.
    #[must_use]
    pub const fn p2(&self) -> Option<Price> {
        self.p2
    }

    /// Target price, when exposed.
    #[must_use]
    pub const fn target_p2(&self) -> Option<Price> {
        self.target_p2
    }

    /// Returns `true` if the payout is strictly positive.
    #[must_use]
    pub const fn has_positive_payout(&self) -> bool {
        self.payout > 0
    }

    /// Returns `true` if the payout is negative (price impact too large).
    #[must_use]
    pub const fn has_negative_payout(&self) -> bool {
        self.payout < 0
    }
}

/// State of the curve quote for the current input.
///
/// `NotReady` and `Rejected` are distinct: the first means curve
/// parameters have not been delivered yet, the second that the curve saw
/// the trade and refused it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ExchangeQuote {
    /// Curve parameters are not loaded; nothing was asked.
    #[default]
    NotReady,
    /// The curve refused the trade.
    Rejected,
    /// The curve priced the trade.
    Ready(ExchangeOutcome),
}

impl ExchangeQuote {
    /// Wraps an oracle answer: `None` is a rejection.
    #[must_use]
    pub const fn from_oracle(answer: Option<ExchangeOutcome>) -> Self {
        match answer {
            Some(outcome) => Self::Ready(outcome),
            None => Self::Rejected,
        }
    }

    /// Returns the outcome if the curve priced the trade.
    #[must_use]
    pub const fn outcome(&self) -> Option<&ExchangeOutcome> {
        match self {
            Self::Ready(outcome) => Some(outcome),
            Self::NotReady | Self::Rejected => None,
        }
    }

    /// Returns `true` for [`ExchangeQuote::Ready`].
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Returns `true` for [`ExchangeQuote::Rejected`].
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    /// Returns `true` for [`ExchangeQuote::NotReady`].
    #[must_use]
    pub const fn is_not_ready(&self) -> bool {
        matches!(self, Self::NotReady)
    }
}

impl fmt::Display for ExchangeQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "NotReady"),
            Self::Rejected => write!(f, "Rejected"),
            Self::Ready(o) => write!(f, "Ready(payout={})", o.payout),
        }
    }
}
