//! Bonding-curve parameters as published by the protocol.

use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{Decimals, TokenType};
use crate::error::RedeemError;

/// How an oracle feed is combined into the curve's price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// The feed value is multiplied in (`"*"`).
    #[serde(rename = "*")]
    Multiply,
    /// The feed value is divided out (`"/"`).
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// Returns `true` for [`Operator::Multiply`].
    #[must_use]
    pub const fn is_multiplicative(&self) -> bool {
        matches!(self, Self::Multiply)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Multiply => write!(f, "*"),
            Self::Divide => write!(f, "/"),
        }
    }
}

/// One oracle feed feeding the curve price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleFeed {
    /// Address of the oracle posting the feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle: Option<String>,
    /// Name of the data feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_name: Option<String>,
    /// How the feed value enters the price.
    pub op: Operator,
}

/// The curve's parameter set.
///
/// Only a handful of fields are interpreted here: token and reserve
/// precisions, the reserve asset id, the first oracle operator and the
/// leverage. Everything else is kept verbatim in [`extra`](Self::extra)
/// and handed to the [`ExchangeOracle`](crate::traits::ExchangeOracle)
/// untouched.
///
/// Two generations of the parameter layout exist: newer curves list their
/// feeds under `oracles`, older ones carry a single `op1`.
///
/// # Examples
///
/// ```
/// use bonded_redeem::config::CurveParameters;
///
/// let params = CurveParameters::from_json(r#"{
///     "reserve_asset": "base",
///     "reserve_asset_decimals": 9,
///     "decimals1": 6,
///     "decimals2": 4,
///     "oracles": [{ "oracle": "ORACLE", "feed_name": "GBYTE_USD", "op": "*" }]
/// }"#).expect("valid params");
/// assert!(params.price_inversed());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveParameters {
    /// Asset id of the reserve.
    pub reserve_asset: String,
    /// Precision of the reserve asset.
    pub reserve_asset_decimals: Decimals,
    /// Precision of the growth token.
    pub decimals1: Decimals,
    /// Precision of the interest token.
    pub decimals2: Decimals,
    /// Leverage applied to the tracked price; zero or absent means none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leverage: Option<f64>,
    /// Oracle feeds (current layout).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracles: Option<Vec<OracleFeed>>,
    /// Operator of the single oracle (legacy layout).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op1: Option<Operator>,
    /// Every other curve parameter, passed through unread.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CurveParameters {
    /// Parses and validates parameters from their JSON form.
    ///
    /// # Errors
    ///
    /// - [`RedeemError::Json`] if the document does not parse.
    /// - Any error from [`validate`](Self::validate).
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks the fields the preview engine relies on.
    ///
    /// # Errors
    ///
    /// Returns [`RedeemError::InvalidConfiguration`] if the oracle list is
    /// present but empty, if no operator can be determined, or if the
    /// leverage is not finite.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.reserve_asset.is_empty() {
            return Err(RedeemError::InvalidConfiguration(
                "reserve_asset must not be empty",
            ));
        }
        if matches!(&self.oracles, Some(feeds) if feeds.is_empty()) {
            return Err(RedeemError::InvalidConfiguration(
                "oracles must list at least one feed",
            ));
        }
        if self.first_operator().is_none() {
            return Err(RedeemError::InvalidConfiguration(
                "either oracles or op1 must be set",
            ));
        }
        if matches!(self.leverage, Some(l) if !l.is_finite()) {
            return Err(RedeemError::InvalidConfiguration(
                "leverage must be finite",
            ));
        }
        Ok(())
    }

    /// Operator of the first oracle leg, from whichever layout is used.
    #[must_use]
    pub fn first_operator(&self) -> Option<Operator> {
        match &self.oracles {
            Some(feeds) => feeds.first().map(|feed| feed.op),
            None => self.op1,
        }
    }

    /// Returns `true` if a non-zero leverage is configured.
    #[must_use]
    pub fn is_leveraged(&self) -> bool {
        matches!(self.leverage, Some(l) if l != 0.0)
    }

    /// Whether curve prices must be shown as reciprocals.
    ///
    /// A multiplicative first leg without leverage quotes the tracked
    /// price the other way round from reserve-per-token.
    #[must_use]
    pub fn price_inversed(&self) -> bool {
        self.first_operator()
            .is_some_and(|op| op.is_multiplicative())
            && !self.is_leveraged()
    }

    /// Precision of the given leg.
    #[must_use]
    pub const fn decimals_for(&self, token_type: TokenType) -> Decimals {
        match token_type {
            TokenType::Growth => self.decimals1,
            TokenType::Interest => self.decimals2,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn parse(json: &str) -> CurveParameters {
        match CurveParameters::from_json(json) {
            Ok(p) => p,
            Err(e) => panic!("params should parse: {e}"),
        }
    }

    fn with_oracle(op: &str, leverage: Option<f64>) -> CurveParameters {
        let leverage = leverage.map_or(String::new(), |l| format!(r#","leverage": {l}"#));
        parse(&format!(
            r#"{{"reserve_asset":"base","reserve_asset_decimals":9,"decimals1":6,"decimals2":4,
                "oracles":[{{"oracle":"O","feed_name":"F","op":"{op}"}}]{leverage}}}"#
        ))
    }

    #[test]
    fn multiplicative_unleveraged_is_inversed() {
        assert!(with_oracle("*", None).price_inversed());
        assert!(with_oracle("*", Some(0.0)).price_inversed());
    }

    #[test]
    fn leverage_disables_inversion() {
        assert!(!with_oracle("*", Some(2.0)).price_inversed());
    }

    #[test]
    fn divisive_never_inversed() {
        assert!(!with_oracle("/", None).price_inversed());
    }

    #[test]
    fn legacy_op1_layout() {
        let p = parse(
            r#"{"reserve_asset":"base","reserve_asset_decimals":9,"decimals1":6,"decimals2":4,
                "op1":"*","oracle1":"O","feed_name1":"F","m":2,"n":0.5}"#,
        );
        assert_eq!(p.first_operator(), Some(Operator::Multiply));
        assert!(p.price_inversed());
        assert!(p.extra.contains_key("m"));
        assert!(p.extra.contains_key("oracle1"));
    }

    #[test]
    fn oracles_take_precedence_over_op1() {
        let p = parse(
            r#"{"reserve_asset":"base","reserve_asset_decimals":9,"decimals1":6,"decimals2":4,
                "oracles":[{"op":"/"}],"op1":"*"}"#,
        );
        assert_eq!(p.first_operator(), Some(Operator::Divide));
        assert!(!p.price_inversed());
    }

    #[test]
    fn empty_oracles_rejected() {
        let r = CurveParameters::from_json(
            r#"{"reserve_asset":"base","reserve_asset_decimals":9,"decimals1":6,"decimals2":4,
                "oracles":[]}"#,
        );
        assert_eq!(
            r.err(),
            Some(RedeemError::InvalidConfiguration(
                "oracles must list at least one feed"
            ))
        );
    }

    #[test]
    fn missing_operator_rejected() {
        let r = CurveParameters::from_json(
            r#"{"reserve_asset":"base","reserve_asset_decimals":9,"decimals1":6,"decimals2":4}"#,
        );
        assert!(r.is_err());
    }

    #[test]
    fn unknown_operator_is_json_error() {
        let r = CurveParameters::from_json(
            r#"{"reserve_asset":"base","reserve_asset_decimals":9,"decimals1":6,"decimals2":4,
                "op1":"+"}"#,
        );
        assert!(matches!(r, Err(RedeemError::Json(_))));
    }

    #[test]
    fn decimals_per_leg() {
        let p = with_oracle("*", None);
        assert_eq!(p.decimals_for(TokenType::Growth).get(), 6);
        assert_eq!(p.decimals_for(TokenType::Interest).get(), 4);
        assert_eq!(p.reserve_asset_decimals.get(), 9);
    }

    #[test]
    fn operator_display() {
        assert_eq!(Operator::Multiply.to_string(), "*");
        assert_eq!(Operator::Divide.to_string(), "/");
    }
}
