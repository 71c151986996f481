//! # Bonded Redeem
//!
//! Redemption preview engine for bonded stablecoin curves: redeem growth
//! or interest tokens back into the reserve asset, with a live preview of
//! the payout, fee, reward and price impact, and submission gated on
//! validity and economic safety.
//!
//! The bonding-curve math itself is not part of this crate. It is consumed
//! through the [`ExchangeOracle`](traits::ExchangeOracle) trait as a pure
//! function; any closure with the right signature works.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `deep-link` | yes | [`WalletLinkBuilder`](traits::WalletLinkBuilder) (`base64`, `urlencoding`) |
//! | `locale` | yes | [`LocaleRouter`](locale::LocaleRouter) path prefix rewriting |
//!
//! # Quick Start
//!
//! ```rust
//! use bonded_redeem::config::{CurveParameters, CurveState, RedeemConfig};
//! use bonded_redeem::domain::{ExchangeOutcome, TokenType};
//! use bonded_redeem::engine::{FormEvent, PreviewEngine, RedeemForm};
//! use bonded_redeem::traits::{ExchangeRequest, FixedClock};
//!
//! // 1. Plug in the curve: here a flat 1 reserve unit per 20 token units.
//! let curve = |req: &ExchangeRequest<'_>| {
//!     Some(ExchangeOutcome::new(-req.trade_delta.tokens1() / 20).with_fee_percent(0.1234))
//! };
//!
//! // 2. Build the form for the growth token
//! let config = RedeemConfig::default().with_reserve("base", "GBYTE");
//! let engine = PreviewEngine::with_clock(curve, FixedClock(1_700_000_000), config);
//! let mut form = RedeemForm::with_engine(engine, TokenType::Growth);
//!
//! // 3. Feed it what the shell knows
//! form.handle(FormEvent::TargetChanged { address: "CURVE".into(), token_type: TokenType::Growth });
//! form.handle(FormEvent::CurveParamsChanged {
//!     params: Some(CurveParameters::from_json(r#"{
//!         "reserve_asset": "base", "reserve_asset_decimals": 2,
//!         "decimals1": 6, "decimals2": 4, "op1": "*"
//!     }"#).expect("valid params")),
//! });
//! form.handle(FormEvent::CurveStateChanged { state: Some(CurveState::default()) });
//! form.handle(FormEvent::SupplyChanged { supply: Some("100".parse().expect("numeric")) });
//!
//! // 4. The user types an amount
//! form.handle(FormEvent::AmountChanged { raw: "10".into() });
//!
//! let preview = form.preview();
//! assert_eq!(preview.text.to_string(), "You will get 5000.00 GBYTE");
//! assert_eq!(preview.display.fee_percent, "0.1234%");
//! assert!(preview.can_submit);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │    Shell     │  sends FormEvent, renders PreviewState
//! └──────┬──────┘
//!        │ handle(event)
//!        ▼
//! ┌─────────────┐
//! │ RedeemForm   │  InputValidator + TriggerSnapshot
//! └──────┬──────┘
//!        │ observe / evaluate / commit
//!        ▼
//! ┌─────────────┐
//! │PreviewEngine │  TradeDelta, PriceImpact, gates, display strings
//! └──────┬──────┘
//!        │ exchange_result(&request)
//!        ▼
//! ┌─────────────┐
//! │ExchangeOracle│  bonding-curve math (external)
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`TokenAmount`](domain::TokenAmount), [`Price`](domain::Price), [`TradeDelta`](domain::TradeDelta), [`ExchangeQuote`](domain::ExchangeQuote), etc. |
//! | [`config`] | Curve parameters and state as delivered by the protocol, plus [`RedeemConfig`](config::RedeemConfig) |
//! | [`validation`] | [`InputValidator`](validation::InputValidator) for the amount field |
//! | [`engine`] | [`PreviewEngine`](engine::PreviewEngine) and the [`RedeemForm`](engine::RedeemForm) reducer |
//! | [`traits`] | Seams: [`ExchangeOracle`](traits::ExchangeOracle), [`LinkBuilder`](traits::LinkBuilder), [`Clock`](traits::Clock) |
//! | `locale` | Locale path prefixes (`locale` feature) |
//! | [`error`] | [`RedeemError`](error::RedeemError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
#[cfg(feature = "locale")]
pub mod locale;
pub mod prelude;
pub mod traits;
pub mod validation;
