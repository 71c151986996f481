//! Seams to the collaborators the engine consumes but does not own.
//!
//! - [`ExchangeOracle`] prices a trade against the bonding curve.
//! - [`LinkBuilder`] formats the wallet deep link on submission.
//! - [`Clock`] supplies the timestamp trades are priced at.

mod clock;
mod exchange_oracle;
mod link_builder;

pub use clock::{Clock, FixedClock, SystemClock};
pub use exchange_oracle::{ExchangeOracle, ExchangeRequest};
pub use link_builder::LinkBuilder;
#[cfg(feature = "deep-link")]
pub use link_builder::WalletLinkBuilder;
