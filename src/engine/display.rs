//! Render-facing preview strings.
//!
//! Everything here is formatting only; the numbers come from
//! [`PreviewState`](super::PreviewState).

use core::fmt;

use super::PriceImpact;
use crate::domain::{Decimals, ExchangeOutcome};

/// Places used for fee and reward percentages.
const PERCENT_PLACES: usize = 4;

/// Places used for the relative price figures.
const CHANGE_PERCENT_PLACES: usize = 2;

/// The single line of preview text under the amount field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewText {
    /// Nothing to say.
    #[default]
    None,
    /// The redemption is fine; this is what the user gets.
    WillReceive {
        /// Payout in reserve units, fixed to the reserve precision.
        amount: String,
        /// Reserve display name.
        symbol: String,
    },
    /// The curve would pay a negative amount: the trade moves the price
    /// too much.
    PriceImpactTooLarge,
}

impl PreviewText {
    /// Returns `true` for [`PreviewText::None`].
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for PreviewText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::WillReceive { amount, symbol } => write!(f, "You will get {amount} {symbol}"),
            Self::PriceImpactTooLarge => write!(
                f,
                "The transaction would change the price too much, please try a smaller amount"
            ),
        }
    }
}

/// Which side of the target the final price lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TargetSide {
    /// Strictly above the target.
    Above,
    /// At or below the target.
    #[default]
    Below,
}

impl TargetSide {
    /// Side for a signed deviation; zero counts as below.
    #[must_use]
    pub fn of(deviation_percent: f64) -> Self {
        if deviation_percent > 0.0 {
            Self::Above
        } else {
            Self::Below
        }
    }
}

impl fmt::Display for TargetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Above => write!(f, "above the target"),
            Self::Below => write!(f, "below the target"),
        }
    }
}

/// Formatted detail lines of the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDisplay {
    /// Fee, e.g. `"0.1234%"`, or `"0%"` when the curve reports none.
    pub fee_percent: String,
    /// Reward, e.g. `"0.0500%"`, or `"0%"`.
    pub reward_percent: String,
    /// Signed absolute price change, fixed to the reserve precision.
    pub price_change: Option<String>,
    /// Signed relative price change, fixed to two places with `%`.
    pub price_change_percent: Option<String>,
    /// Final displayed price, fixed to the reserve precision.
    pub final_price: Option<String>,
    /// Unsigned deviation from the target, fixed to two places with `%`.
    pub target_deviation: Option<String>,
    /// Side of the target the final price lands on.
    pub target_side: TargetSide,
    /// Whether the detail panel should be shown at all.
    pub show_details: bool,
}

impl Default for PreviewDisplay {
    fn default() -> Self {
        Self {
            fee_percent: percent_or_zero(None),
            reward_percent: percent_or_zero(None),
            price_change: None,
            price_change_percent: None,
            final_price: None,
            target_deviation: None,
            target_side: TargetSide::default(),
            show_details: false,
        }
    }
}

impl PreviewDisplay {
    /// Formats the detail lines of an outcome.
    ///
    /// `impact` is `None` when the tracked price could not be evaluated;
    /// the price lines are then absent. `show_details` is passed through
    /// from the engine's gate.
    #[must_use]
    pub fn new(
        outcome: Option<&ExchangeOutcome>,
        impact: Option<&PriceImpact>,
        reserve_decimals: Decimals,
        show_details: bool,
    ) -> Self {
        let places = usize::from(reserve_decimals.get());
        let has_p2 = outcome.is_some_and(|o| o.p2().is_some());
        let impact = impact.filter(|_| has_p2);
        Self {
            fee_percent: percent_or_zero(outcome.and_then(ExchangeOutcome::fee_percent)),
            reward_percent: percent_or_zero(outcome.and_then(ExchangeOutcome::reward_percent)),
            price_change: impact.map(|i| signed_fixed(i.price_change(), places)),
            price_change_percent: impact.map(|i| {
                format!(
                    "{}%",
                    signed_fixed(i.price_change_percent(), CHANGE_PERCENT_PLACES)
                )
            }),
            final_price: impact
                .and_then(PriceImpact::final_price)
                .map(|p| to_fixed(p.get(), places)),
            target_deviation: impact.map(|i| {
                format!(
                    "{}%",
                    to_fixed(i.target_deviation_percent().abs(), CHANGE_PERCENT_PLACES)
                )
            }),
            target_side: impact
                .map(|i| TargetSide::of(i.target_deviation_percent()))
                .unwrap_or_default(),
            show_details,
        }
    }
}

/// Formats `value` with exactly `places` fractional digits, never
/// producing a negative zero.
#[must_use]
pub fn to_fixed(value: f64, places: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let s = format!("{value:.places$}");
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}

/// Like [`to_fixed`], with a leading `+` for positive values.
#[must_use]
pub fn signed_fixed(value: f64, places: usize) -> String {
    let body = to_fixed(value, places);
    if value > 0.0 {
        format!("+{body}")
    } else {
        body
    }
}

fn percent_or_zero(value: Option<f64>) -> String {
    value.map_or_else(
        || "0%".to_string(),
        |v| format!("{}%", to_fixed(v, PERCENT_PLACES)),
    )
}
