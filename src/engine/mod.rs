//! The redemption preview engine.
//!
//! [`PreviewEngine`] turns a [`TriggerSnapshot`] into a [`PreviewState`]:
//! it builds the trade delta, asks the [`ExchangeOracle`](crate::traits::ExchangeOracle),
//! derives the [`PriceImpact`] and the submission gates, and formats the
//! [`PreviewDisplay`] strings. [`RedeemForm`] sits on top and maps shell
//! notifications ([`FormEvent`]) onto snapshots.
//!
//! # Gates
//!
//! | Flag | Condition |
//! |------|-----------|
//! | `can_submit` | valid, amount set, quote ready, payout >= 0, amount <= supply |
//! | `can_submit_on_enter` | valid and the curve did not reject |
//! | `show_details` | quote ready, valid, amount set, price moved, payout > 0 |

mod display;
mod event;
mod form;
mod preview;
mod preview_engine;
mod price_impact;
mod trigger;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use display::{signed_fixed, to_fixed, PreviewDisplay, PreviewText, TargetSide};
pub use event::FormEvent;
pub use form::{MarketInputs, RedeemForm};
pub use preview::PreviewState;
pub use preview_engine::{within_supply, PreviewEngine};
pub use price_impact::PriceImpact;
pub use trigger::{RecomputeTicket, TriggerSnapshot};
