//! Derived preview of the current redemption.

use super::{PreviewDisplay, PreviewText};
use crate::domain::{ExchangeQuote, Price};

/// Everything the shell renders for the entered amount.
///
/// The default value is the initial no-preview form shown before any input
/// and after every reset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreviewState {
    /// Tri-state validity of the entered amount.
    pub valid: Option<bool>,
    /// Curve quote for the amount.
    pub quote: ExchangeQuote,
    /// Absolute change of the displayed price; zero without a tracked price.
    pub price_change: f64,
    /// Relative change of the displayed price, in percent.
    pub price_change_percent: f64,
    /// Deviation of the final price from the target, in percent.
    pub target_deviation_percent: f64,
    /// Displayed price after the trade.
    pub final_price: Option<Price>,
    /// Whether the redeem button is enabled.
    pub can_submit: bool,
    /// Whether pressing Enter in the amount field submits.
    pub can_submit_on_enter: bool,
    /// Line of text under the amount field.
    pub text: PreviewText,
    /// Formatted detail lines.
    pub display: PreviewDisplay,
    /// The curve returned a tracked price but a reference price was zero
    /// or missing; price lines are withheld.
    pub configuration_fault: bool,
}

impl PreviewState {
    /// Returns `true` if this is the initial no-preview form.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }

    /// Returns `true` if the numeric figures of both previews agree.
    ///
    /// Formatted strings follow from the figures, so this is the equality
    /// recompute idempotence is stated in.
    #[must_use]
    pub fn same_figures(&self, other: &Self) -> bool {
        self.valid == other.valid
            && self.quote == other.quote
            && self.price_change.to_bits() == other.price_change.to_bits()
            && self.price_change_percent.to_bits() == other.price_change_percent.to_bits()
            && self.target_deviation_percent.to_bits() == other.target_deviation_percent.to_bits()
            && self.final_price == other.final_price
            && self.can_submit == other.can_submit
            && self.can_submit_on_enter == other.can_submit_on_enter
    }
}
