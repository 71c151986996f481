//! Unified error types for the redemption preview engine.
//!
//! All fallible operations across the crate return [`RedeemError`] as
//! their error type, so the shell sees one consistent taxonomy whether a
//! failure came from input parsing, configuration loading or price-impact
//! derivation.

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, RedeemError>;

/// Every failure the preview engine can report.
///
/// Variants carrying a `&'static str` describe which invariant was broken;
/// they never carry user-supplied text.
#[derive(Debug, thiserror::Error)]
pub enum RedeemError {
    /// The entered amount is not a usable token quantity.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A decimal-precision value is out of range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// A price is negative, NaN or infinite.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// A token type code other than `1` (growth) or `2` (interest).
    #[error("invalid token type: {0}")]
    InvalidTokenType(u8),

    /// Static configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The curve or oracle supplied data that breaks its own contract,
    /// such as a zero reference price.
    #[error("curve configuration fault: {0}")]
    ConfigurationFault(&'static str),

    /// An intermediate value does not fit its target type.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Curve parameters, curve state or configuration JSON did not parse.
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

impl PartialEq for RedeemError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b))
            | (Self::InvalidPrecision(a), Self::InvalidPrecision(b))
            | (Self::InvalidPrice(a), Self::InvalidPrice(b))
            | (Self::InvalidConfiguration(a), Self::InvalidConfiguration(b))
            | (Self::ConfigurationFault(a), Self::ConfigurationFault(b))
            | (Self::Overflow(a), Self::Overflow(b)) => a == b,
            (Self::InvalidTokenType(a), Self::InvalidTokenType(b)) => a == b,
            (Self::DivisionByZero, Self::DivisionByZero) => true,
            (Self::Json(a), Self::Json(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
