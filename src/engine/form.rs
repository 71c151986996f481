//! The redemption form: shell events in, preview out.

use rust_decimal::RoundingStrategy;
use serde_json::Map;
use tracing::{debug, trace};

use super::{FormEvent, PreviewEngine, PreviewState, TriggerSnapshot};
use crate::config::{CurveParameters, CurveState, RedeemConfig};
use crate::domain::{Decimals, Price, RedemptionRequest, TokenAmount, TokenType};
use crate::traits::{Clock, ExchangeOracle, LinkBuilder, SystemClock};
use crate::validation::{InputValidator, Validation, ValidationConstraints};

/// Market data supplied by the shell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarketInputs {
    /// Curve parameters, once loaded.
    pub curve_params: Option<CurveParameters>,
    /// Curve state, once loaded.
    pub curve_state: Option<CurveState>,
    /// Oracle feed price.
    pub oracle_price: Option<Price>,
    /// Reserve market price.
    pub reserve_price: Option<Price>,
    /// Current tracked price.
    pub current_p2: Option<Price>,
    /// Redeemable supply of the current leg.
    pub supply: Option<TokenAmount>,
}

/// State of one redemption form, for one (address, leg) target.
///
/// Every shell notification goes through [`handle`](Self::handle), which
/// updates the inputs, revalidates when needed and recomputes the preview
/// if the trigger set changed.
#[derive(Debug)]
pub struct RedeemForm<O, C = SystemClock> {
    engine: PreviewEngine<O, C>,
    address: Option<String>,
    token_type: TokenType,
    active_wallet: Option<String>,
    raw_amount: String,
    amount: Option<TokenAmount>,
    valid: Option<bool>,
    market: MarketInputs,
    symbol: Option<String>,
    reserve_asset_symbol: Option<String>,
}

impl<O: ExchangeOracle> RedeemForm<O, SystemClock> {
    /// Creates an empty form redeeming `token_type`.
    #[must_use]
    pub fn new(oracle: O, config: RedeemConfig, token_type: TokenType) -> Self {
        Self::with_engine(PreviewEngine::new(oracle, config), token_type)
    }
}

impl<O: ExchangeOracle, C: Clock> RedeemForm<O, C> {
    /// Creates an empty form around an existing engine.
    #[must_use]
    pub fn with_engine(engine: PreviewEngine<O, C>, token_type: TokenType) -> Self {
        Self {
            engine,
            address: None,
            token_type,
            active_wallet: None,
            raw_amount: String::new(),
            amount: None,
            valid: None,
            market: MarketInputs::default(),
            symbol: None,
            reserve_asset_symbol: None,
        }
    }

    // -- Accessors -----------------------------------------------------------

    /// Current preview.
    #[must_use]
    pub const fn preview(&self) -> &PreviewState {
        self.engine.preview()
    }

    /// Underlying engine.
    #[must_use]
    pub const fn engine(&self) -> &PreviewEngine<O, C> {
        &self.engine
    }

    /// Amount field as typed.
    #[must_use]
    pub fn raw_amount(&self) -> &str {
        &self.raw_amount
    }

    /// Parsed amount, if the field holds a number.
    #[must_use]
    pub const fn amount(&self) -> Option<TokenAmount> {
        self.amount
    }

    /// Tri-state validity of the amount field.
    #[must_use]
    pub const fn valid(&self) -> Option<bool> {
        self.valid
    }

    /// Redemption destination.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Leg being redeemed.
    #[must_use]
    pub const fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Market data last supplied.
    #[must_use]
    pub const fn market(&self) -> &MarketInputs {
        &self.market
    }

    /// Precision of the redeemed token, once parameters are loaded.
    #[must_use]
    pub fn decimals(&self) -> Option<Decimals> {
        self.market
            .curve_params
            .as_ref()
            .map(|p| p.decimals_for(self.token_type))
    }

    /// Asset id of the redeemed token, once the curve state is loaded.
    #[must_use]
    pub fn asset(&self) -> Option<&str> {
        self.market
            .curve_state
            .as_ref()
            .and_then(|s| s.asset(self.token_type))
    }

    /// What the amount placeholder names the token by: the symbol when
    /// known, else the asset id.
    #[must_use]
    pub fn placeholder_subject(&self) -> Option<&str> {
        self.symbol.as_deref().or_else(|| self.asset())
    }

    /// Placeholder text of the amount field.
    #[must_use]
    pub fn placeholder(&self) -> String {
        format!(
            "Amount of {} ({}, {} tokens)",
            self.token_type,
            self.placeholder_subject().unwrap_or(""),
            self.token_type.label()
        )
    }

    // -- Events --------------------------------------------------------------

    /// Applies one shell event.
    ///
    /// Returns `true` if the preview was recomputed or reset.
    pub fn handle(&mut self, ev: FormEvent) -> bool {
        trace!(event = ev.kind(), "form event");
        let generation = self.engine.generation();
        match ev {
            FormEvent::AmountChanged { raw } => {
                self.raw_amount = raw;
                self.revalidate();
            }
            FormEvent::WalletChanged { wallet } => self.active_wallet = wallet,
            FormEvent::TargetChanged {
                address,
                token_type,
            } => {
                if !self.retarget(address, token_type) {
                    return false;
                }
            }
            FormEvent::CurveParamsChanged { params } => {
                self.market.curve_params = params;
                self.revalidate_if_touched();
            }
            FormEvent::CurveStateChanged { state } => self.market.curve_state = state,
            FormEvent::OraclePriceChanged { price } => self.market.oracle_price = price,
            FormEvent::ReservePriceChanged { price } => self.market.reserve_price = price,
            FormEvent::CurrentPriceChanged { p2 } => self.market.current_p2 = p2,
            FormEvent::SupplyChanged { supply } => {
                self.market.supply = supply;
                self.revalidate_if_touched();
            }
            FormEvent::SymbolsChanged {
                symbol,
                reserve_asset_symbol,
            } => {
                self.symbol = symbol;
                self.reserve_asset_symbol = reserve_asset_symbol;
            }
        }
        if self.is_untouched() {
            // Nothing entered since the last reset: keep the initial preview.
            return self.engine.generation() != generation;
        }
        let snapshot = self.snapshot();
        let _ = self.engine.refresh(snapshot);
        self.engine.generation() != generation
    }

    /// Points the form at a new target, clearing the amount, its validity
    /// and the preview.
    ///
    /// Returns `false` (and changes nothing) if the target is unchanged.
    pub fn retarget(&mut self, address: String, token_type: TokenType) -> bool {
        if self.address.as_deref() == Some(address.as_str()) && self.token_type == token_type {
            return false;
        }
        if self.token_type != token_type {
            self.market.supply = None;
        }
        debug!(%address, %token_type, "redemption target changed");
        self.address = Some(address);
        self.token_type = token_type;
        self.raw_amount.clear();
        self.amount = None;
        self.valid = None;
        self.engine.reset();
        true
    }

    /// Current trigger set.
    #[must_use]
    pub fn snapshot(&self) -> TriggerSnapshot {
        TriggerSnapshot {
            amount: self.amount,
            active_wallet: self.active_wallet.clone(),
            address: self.address.clone(),
            token_type: self.token_type,
            asset: self.asset().map(str::to_string),
            decimals: self.decimals(),
            valid: self.valid,
            curve_params: self.market.curve_params.clone(),
            curve_state: self.market.curve_state.clone(),
            oracle_price: self.market.oracle_price,
            reserve_price: self.market.reserve_price,
            current_p2: self.market.current_p2,
            supply: self.market.supply,
            reserve_asset_symbol: self.reserve_asset_symbol.clone(),
        }
    }

    // -- Submission ----------------------------------------------------------

    /// Deep link paying the entered amount to the curve.
    ///
    /// The amount is rounded to the token precision and then truncated to
    /// base units, so the on-chain amount never exceeds the previewed one.
    /// Returns `Ok(None)` while the destination, amount or precision is
    /// unknown.
    ///
    /// # Errors
    ///
    /// - [`RedeemError::Overflow`](crate::error::RedeemError::Overflow) if
    ///   the amount does not fit in base units.
    /// - Any error from the builder.
    pub fn deep_link<B: LinkBuilder + ?Sized>(
        &self,
        builder: &B,
    ) -> crate::error::Result<Option<String>> {
        let (Some(address), Some(amount), Some(params)) = (
            self.address.as_deref(),
            self.amount,
            self.market.curve_params.as_ref(),
        ) else {
            return Ok(None);
        };
        let decimals = params.decimals_for(self.token_type);
        let rounded = TokenAmount::new(amount.get().round_dp_with_strategy(
            u32::from(decimals.get()),
            RoundingStrategy::MidpointAwayFromZero,
        ))?;
        let request = RedemptionRequest::new(
            rounded,
            self.token_type,
            decimals,
            params.reserve_asset_decimals,
        );
        let link = builder.build(
            request.amount_in_base_units()?,
            &Map::new(),
            self.active_wallet.as_deref(),
            address,
            self.asset(),
        )?;
        Ok(Some(link))
    }

    // -- Validation ----------------------------------------------------------

    fn is_untouched(&self) -> bool {
        self.valid.is_none() && self.raw_amount.trim().is_empty()
    }

    fn revalidate_if_touched(&mut self) {
        if !self.is_untouched() {
            self.revalidate();
        }
    }

    fn revalidate(&mut self) {
        let Some(decimals) = self.decimals() else {
            // Bounds unknown until parameters load.
            self.amount = InputValidator::parse_amount(&self.raw_amount);
            return;
        };
        let validator =
            InputValidator::new(ValidationConstraints::for_redemption(decimals, self.market.supply));
        self.amount = match validator.validate(&self.raw_amount, &mut self.valid) {
            Validation::Valid(amount) => Some(amount),
            Validation::Empty => None,
            Validation::Invalid(_) => InputValidator::parse_amount(&self.raw_amount),
        };
    }
}
