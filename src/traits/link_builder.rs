//! Wallet deep-link construction.
//!
//! Submitting a redemption hands the wallet a URI describing the payment
//! to the curve: destination, integer amount, asset and optional data.
//! The engine computes the integer amount (truncated, never rounded up);
//! the [`LinkBuilder`] only formats it.

use serde_json::{Map, Value};

/// Builds a wallet deep link for a payment.
pub trait LinkBuilder {
    /// Returns the URI for sending `amount` base units of `asset` (the
    /// native asset when `None`) from `from_address` to `destination`,
    /// attaching `data` when it is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`RedeemError::Json`](crate::error::RedeemError::Json) if
    /// `data` cannot be serialized.
    fn build(
        &self,
        amount: u128,
        data: &Map<String, Value>,
        from_address: Option<&str>,
        destination: &str,
        asset: Option<&str>,
    ) -> crate::error::Result<String>;
}

#[cfg(feature = "deep-link")]
pub use wallet::WalletLinkBuilder;

#[cfg(feature = "deep-link")]
mod wallet {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use serde_json::{Map, Value};

    use super::LinkBuilder;
    use crate::config::{RedeemConfig, DEFAULT_LINK_SCHEME};

    /// Asset id of the chain's native coin.
    const NATIVE_ASSET: &str = "base";

    /// Builds `scheme:destination?amount=…&asset=…` links understood by
    /// the wallet, with data carried as URL-safe base64 JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use bonded_redeem::traits::{LinkBuilder, WalletLinkBuilder};
    ///
    /// let link = WalletLinkBuilder::default()
    ///     .build(10_000_000, &Default::default(), None, "CURVE", Some("GROWTH"))
    ///     .expect("serializable");
    /// assert_eq!(link, "obyte:CURVE?amount=10000000&asset=GROWTH");
    /// ```
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct WalletLinkBuilder {
        scheme: String,
    }

    impl Default for WalletLinkBuilder {
        fn default() -> Self {
            Self {
                scheme: DEFAULT_LINK_SCHEME.to_string(),
            }
        }
    }

    impl WalletLinkBuilder {
        /// Creates a builder for the given URI scheme.
        #[must_use]
        pub fn new(scheme: impl Into<String>) -> Self {
            Self {
                scheme: scheme.into(),
            }
        }

        /// Creates a builder using the configured scheme.
        #[must_use]
        pub fn from_config(config: &RedeemConfig) -> Self {
            Self::new(config.link_scheme.clone())
        }

        /// The URI scheme in use.
        #[must_use]
        pub fn scheme(&self) -> &str {
            &self.scheme
        }
    }

    impl LinkBuilder for WalletLinkBuilder {
        fn build(
            &self,
            amount: u128,
            data: &Map<String, Value>,
            from_address: Option<&str>,
            destination: &str,
            asset: Option<&str>,
        ) -> crate::error::Result<String> {
            let asset = asset.unwrap_or(NATIVE_ASSET);
            let mut link = format!(
                "{}:{}?amount={}&asset={}",
                self.scheme,
                destination,
                amount,
                urlencoding::encode(asset)
            );
            if !data.is_empty() {
                let json = serde_json::to_string(data)?;
                link.push_str("&base64data=");
                link.push_str(&URL_SAFE_NO_PAD.encode(json));
            }
            if let Some(from) = from_address {
                link.push_str("&from_address=");
                link.push_str(&urlencoding::encode(from));
            }
            Ok(link)
        }
    }

}
