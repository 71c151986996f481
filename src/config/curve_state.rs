//! Live curve state.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::TokenType;

/// Snapshot of the curve's on-chain variables.
///
/// The preview engine reads only the asset ids of both legs; the
/// remaining variables (supplies, reserve balance, interest accrual, …)
/// are opaque and forwarded to the oracle as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurveState {
    /// Asset id of the growth token, once issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset1: Option<String>,
    /// Asset id of the interest token, once issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset2: Option<String>,
    /// All other state variables.
    #[serde(flatten)]
    pub vars: Map<String, Value>,
}

impl CurveState {
    /// Parses curve state from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RedeemError::Json`](crate::error::RedeemError::Json) if
    /// the document does not parse.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Asset id of the given leg.
    #[must_use]
    pub fn asset(&self, token_type: TokenType) -> Option<&str> {
        match token_type {
            TokenType::Growth => self.asset1.as_deref(),
            TokenType::Interest => self.asset2.as_deref(),
        }
    }
}
