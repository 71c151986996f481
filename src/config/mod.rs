//! Curve parameters, curve state and form configuration.
//!
//! [`CurveParameters`] and [`CurveState`] arrive from the protocol as JSON
//! and are mostly opaque to this crate. [`RedeemConfig`] holds the
//! deployment settings (reserve display names, deep-link scheme).

mod curve_params;
mod curve_state;
mod redeem_config;

pub use curve_params::{CurveParameters, OracleFeed, Operator};
pub use curve_state::CurveState;
pub use redeem_config::{RedeemConfig, ReserveInfo, DEFAULT_LINK_SCHEME};
