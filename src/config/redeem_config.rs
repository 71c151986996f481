//! Static configuration of the redemption form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RedeemError;

/// Default URI scheme of wallet deep links.
pub const DEFAULT_LINK_SCHEME: &str = "obyte";

/// Display metadata of a known reserve asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveInfo {
    /// Human name shown in previews (e.g. `"GBYTE"`).
    pub name: String,
}

/// Deployment-wide settings the form reads but never changes.
///
/// # Examples
///
/// ```
/// use bonded_redeem::config::RedeemConfig;
///
/// let cfg = RedeemConfig::from_json(r#"{
///     "reserves": { "base": { "name": "GBYTE" } }
/// }"#).expect("valid config");
/// assert_eq!(cfg.reserve_display_name("base", None), "GBYTE");
/// assert_eq!(cfg.reserve_display_name("other", Some("OUSD")), "OUSD");
/// assert_eq!(cfg.link_scheme, "obyte");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedeemConfig {
    /// Known reserve assets keyed by asset id.
    #[serde(default)]
    pub reserves: BTreeMap<String, ReserveInfo>,
    /// URI scheme used for wallet deep links.
    #[serde(default = "default_link_scheme")]
    pub link_scheme: String,
}

fn default_link_scheme() -> String {
    DEFAULT_LINK_SCHEME.to_string()
}

impl Default for RedeemConfig {
    fn default() -> Self {
        Self {
            reserves: BTreeMap::new(),
            link_scheme: default_link_scheme(),
        }
    }
}

impl RedeemConfig {
    /// Parses and validates configuration from JSON.
    ///
    /// # Errors
    ///
    /// - [`RedeemError::Json`] if the document does not parse.
    /// - Any error from [`validate`](Self::validate).
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Adds a known reserve.
    #[must_use]
    pub fn with_reserve(mut self, asset: impl Into<String>, name: impl Into<String>) -> Self {
        self.reserves
            .insert(asset.into(), ReserveInfo { name: name.into() });
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RedeemError::InvalidConfiguration`] if the link scheme is
    /// empty or not alphanumeric, or if any reserve has an empty name.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.link_scheme.is_empty()
            || !self
                .link_scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '+' || c == '.')
        {
            return Err(RedeemError::InvalidConfiguration(
                "link_scheme must be a non-empty URI scheme",
            ));
        }
        if self.reserves.values().any(|r| r.name.is_empty()) {
            return Err(RedeemError::InvalidConfiguration(
                "reserve names must not be empty",
            ));
        }
        Ok(())
    }

    /// Name to show for the reserve asset: the configured name, else the
    /// symbol supplied by the shell, else empty.
    #[must_use]
    pub fn reserve_display_name<'a>(
        &'a self,
        reserve_asset: &str,
        reserve_asset_symbol: Option<&'a str>,
    ) -> &'a str {
        self.reserves
            .get(reserve_asset)
            .map(|r| r.name.as_str())
            .or(reserve_asset_symbol)
            .unwrap_or("")
    }
}
