//! Orchestrates validation state, curve quote and price impact into one
//! authoritative preview.

use tracing::{debug, error, trace, warn};

use super::{PreviewDisplay, PreviewState, PreviewText, PriceImpact, RecomputeTicket, TriggerSnapshot};
use crate::config::RedeemConfig;
use crate::domain::{ExchangeQuote, TokenAmount, TradeDelta};
use crate::traits::{Clock, ExchangeOracle, ExchangeRequest, SystemClock};

/// Keeps the preview in sync with the latest trigger snapshot.
///
/// A recompute is split into three steps so that callers that evaluate
/// off the event path still honour "latest inputs win":
///
/// 1. [`observe`](Self::observe) records a snapshot and issues a
///    [`RecomputeTicket`] if anything changed.
/// 2. [`evaluate`](Self::evaluate) computes the preview for a ticket. It
///    only reads.
/// 3. [`commit`](Self::commit) publishes the result unless a newer ticket
///    (or a reset) has been issued since.
///
/// [`refresh`](Self::refresh) runs all three synchronously.
///
/// # Examples
///
/// ```
/// use bonded_redeem::config::{CurveParameters, CurveState, RedeemConfig};
/// use bonded_redeem::domain::{ExchangeOutcome, TokenType};
/// use bonded_redeem::engine::{PreviewEngine, TriggerSnapshot};
/// use bonded_redeem::traits::{ExchangeRequest, FixedClock};
///
/// let oracle = |_: &ExchangeRequest<'_>| Some(ExchangeOutcome::new(500_000).with_fee_percent(0.1234));
/// let config = RedeemConfig::default().with_reserve("base", "GBYTE");
/// let mut engine = PreviewEngine::with_clock(oracle, FixedClock(1_700_000_000), config);
///
/// let params = CurveParameters::from_json(r#"{
///     "reserve_asset": "base", "reserve_asset_decimals": 2,
///     "decimals1": 6, "decimals2": 4, "op1": "*"
/// }"#).expect("valid params");
/// let mut snapshot = TriggerSnapshot::new(TokenType::Growth);
/// snapshot.amount = Some("10".parse().expect("numeric"));
/// snapshot.decimals = Some(params.decimals1);
/// snapshot.valid = Some(true);
/// snapshot.curve_params = Some(params);
/// snapshot.curve_state = Some(CurveState::default());
///
/// let preview = engine.refresh(snapshot);
/// assert_eq!(preview.text.to_string(), "You will get 5000.00 GBYTE");
/// assert!(preview.can_submit);
/// ```
#[derive(Debug)]
pub struct PreviewEngine<O, C = SystemClock> {
    oracle: O,
    clock: C,
    config: RedeemConfig,
    generation: u64,
    snapshot: Option<TriggerSnapshot>,
    price_inversed: bool,
    preview: PreviewState,
}

impl<O: ExchangeOracle> PreviewEngine<O, SystemClock> {
    /// Creates an engine pricing trades at wall-clock time.
    #[must_use]
    pub fn new(oracle: O, config: RedeemConfig) -> Self {
        Self::with_clock(oracle, SystemClock, config)
    }
}

impl<O: ExchangeOracle, C: Clock> PreviewEngine<O, C> {
    /// Creates an engine with an explicit time source.
    #[must_use]
    pub fn with_clock(oracle: O, clock: C, config: RedeemConfig) -> Self {
        Self {
            oracle,
            clock,
            config,
            generation: 0,
            snapshot: None,
            price_inversed: false,
            preview: PreviewState::default(),
        }
    }

    // -- Accessors -----------------------------------------------------------

    /// The currently published preview.
    #[must_use]
    pub const fn preview(&self) -> &PreviewState {
        &self.preview
    }

    /// The last observed snapshot, if any since the last reset.
    #[must_use]
    pub const fn snapshot(&self) -> Option<&TriggerSnapshot> {
        self.snapshot.as_ref()
    }

    /// Current generation; bumped on every change and reset.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Cached price inversion of the current curve parameters.
    #[must_use]
    pub const fn price_inversed(&self) -> bool {
        self.price_inversed
    }

    /// Static configuration in use.
    #[must_use]
    pub const fn config(&self) -> &RedeemConfig {
        &self.config
    }

    // -- Recompute -----------------------------------------------------------

    /// Records `snapshot` and returns a ticket if it differs from the last
    /// one observed.
    ///
    /// Price inversion is re-derived only when the curve parameters
    /// changed.
    pub fn observe(&mut self, snapshot: TriggerSnapshot) -> Option<RecomputeTicket> {
        let params_changed = match &self.snapshot {
            Some(prev) if *prev == snapshot => {
                trace!(generation = self.generation, "trigger set unchanged");
                return None;
            }
            Some(prev) => prev.curve_params != snapshot.curve_params,
            None => true,
        };
        if params_changed {
            self.price_inversed = snapshot
                .curve_params
                .as_ref()
                .is_some_and(|p| p.price_inversed());
        }
        self.generation += 1;
        self.snapshot = Some(snapshot.clone());
        Some(RecomputeTicket::new(
            self.generation,
            snapshot,
            self.price_inversed,
        ))
    }

    /// Computes the preview for `ticket`.
    ///
    /// Deterministic for a given ticket and clock reading.
    #[must_use]
    pub fn evaluate(&self, ticket: &RecomputeTicket) -> PreviewState {
        let s = ticket.snapshot();
        let quote = self.quote(s);
        debug!(
            generation = ticket.generation(),
            token_type = %s.token_type,
            %quote,
            "preview recomputed"
        );

        let Some(params) = s.curve_params.as_ref() else {
            return PreviewState {
                valid: s.valid,
                can_submit_on_enter: s.valid == Some(true),
                ..PreviewState::default()
            };
        };

        let outcome = quote.outcome();
        if quote.is_rejected() {
            warn!(generation = ticket.generation(), "curve rejected the redemption");
        }
        if outcome.is_some_and(|o| o.has_negative_payout()) {
            warn!(
                generation = ticket.generation(),
                payout = %outcome.map_or(0, |o| o.payout()),
                "redemption would move the price too much"
            );
        }

        let impact = outcome.map(|o| {
            PriceImpact::compute_or_log(o, s.current_p2, ticket.price_inversed())
        });
        let configuration_fault = matches!(impact, Some(None));
        let impact = impact.flatten().unwrap_or_default();

        let valid = s.valid == Some(true);
        let has_amount = s.amount.is_some();
        let can_submit = valid
            && s.amount.is_some_and(|a| within_supply(a, s.supply))
            && outcome.is_some_and(|o| o.payout() >= 0);
        let can_submit_on_enter = valid && !quote.is_rejected();

        let text = match outcome {
            Some(o) if valid && has_amount && o.has_positive_payout() => {
                match params.reserve_asset_decimals.from_base_units(o.payout()) {
                    Ok(amount) => PreviewText::WillReceive {
                        amount: amount.to_string(),
                        symbol: self
                            .config
                            .reserve_display_name(
                                &params.reserve_asset,
                                s.reserve_asset_symbol.as_deref(),
                            )
                            .to_string(),
                    },
                    Err(e) => {
                        error!(error = %e, "payout not representable");
                        PreviewText::None
                    }
                }
            }
            Some(o) if o.has_negative_payout() => PreviewText::PriceImpactTooLarge,
            _ => PreviewText::None,
        };

        let show_details = quote.is_ready()
            && valid
            && has_amount
            && impact.price_change() != 0.0
            && outcome.is_some_and(|o| o.has_positive_payout());
        let display = PreviewDisplay::new(
            outcome,
            (!configuration_fault).then_some(&impact),
            params.reserve_asset_decimals,
            show_details,
        );

        PreviewState {
            valid: s.valid,
            quote,
            price_change: impact.price_change(),
            price_change_percent: impact.price_change_percent(),
            target_deviation_percent: impact.target_deviation_percent(),
            final_price: impact.final_price(),
            can_submit,
            can_submit_on_enter,
            text,
            display,
            configuration_fault,
        }
    }

    /// Publishes `preview` if `ticket` is still the latest.
    ///
    /// Returns `false`, leaving the published preview untouched, for a
    /// stale ticket.
    pub fn commit(&mut self, ticket: &RecomputeTicket, preview: PreviewState) -> bool {
        if ticket.generation() != self.generation {
            trace!(
                stale = ticket.generation(),
                current = self.generation,
                "discarding stale preview"
            );
            return false;
        }
        self.preview = preview;
        true
    }

    /// Observes `snapshot` and, if it changed, recomputes and publishes
    /// synchronously.
    pub fn refresh(&mut self, snapshot: TriggerSnapshot) -> &PreviewState {
        if let Some(ticket) = self.observe(snapshot) {
            let preview = self.evaluate(&ticket);
            self.commit(&ticket, preview);
        }
        &self.preview
    }

    /// Clears the preview back to its initial form and invalidates every
    /// outstanding ticket.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.snapshot = None;
        self.preview = PreviewState::default();
        debug!(generation = self.generation, "preview reset");
    }

    fn quote(&self, s: &TriggerSnapshot) -> ExchangeQuote {
        let (Some(params), Some(state), Some(amount), Some(decimals)) = (
            s.curve_params.as_ref(),
            s.curve_state.as_ref(),
            s.amount,
            s.decimals,
        ) else {
            return ExchangeQuote::NotReady;
        };
        let trade_delta = match TradeDelta::redemption(amount, s.token_type, decimals) {
            Ok(delta) => delta,
            Err(e) => {
                warn!(error = %e, %amount, "amount cannot be priced");
                return ExchangeQuote::Rejected;
            }
        };
        let request = ExchangeRequest {
            trade_delta,
            params,
            state,
            oracle_price: s.oracle_price,
            reserve_price: s.reserve_price,
            timestamp: self.clock.now_unix(),
        };
        ExchangeQuote::from_oracle(self.oracle.exchange_result(&request))
    }
}

/// Returns `true` if `amount` fits under `supply` (uncapped when unknown).
#[must_use]
pub fn within_supply(amount: TokenAmount, supply: Option<TokenAmount>) -> bool {
    supply.map_or(true, |cap| amount <= cap)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::config::{CurveParameters, CurveState};
    use crate::domain::{ExchangeOutcome, Price, TokenType};
    use crate::traits::FixedClock;

    const NOW: u64 = 1_700_000_000;

    fn params(op: &str, leverage: Option<f64>) -> CurveParameters {
        let leverage = leverage.map_or(String::new(), |l| format!(r#","leverage":{l}"#));
        let json = format!(
            r#"{{"reserve_asset":"base","reserve_asset_decimals":2,"decimals1":6,"decimals2":4,"op1":"{op}"{leverage}}}"#
        );
        match CurveParameters::from_json(&json) {
            Ok(p) => p,
            Err(e) => panic!("params should parse: {e}"),
        }
    }

    fn price(v: f64) -> Price {
        let Ok(p) = Price::new(v) else {
            panic!("bad price");
        };
        p
    }

    fn snapshot(amount: &str, supply: &str) -> TriggerSnapshot {
        let mut s = TriggerSnapshot::new(TokenType::Growth);
        let p = params("/", None);
        s.amount = amount.parse().ok();
        s.supply = supply.parse().ok();
        s.decimals = Some(p.decimals1);
        s.valid = Some(true);
        s.address = Some("CURVE".to_string());
        s.curve_params = Some(p);
        s.curve_state = Some(CurveState::default());
        s
    }

    fn engine<O: ExchangeOracle>(oracle: O) -> PreviewEngine<O, FixedClock> {
        PreviewEngine::with_clock(
            oracle,
            FixedClock(NOW),
            RedeemConfig::default().with_reserve("base", "GBYTE"),
        )
    }

    #[test]
    fn oracle_receives_negative_delta_and_time() {
        let seen = Cell::new(None);
        let oracle = |req: &ExchangeRequest<'_>| {
            seen.set(Some((req.trade_delta, req.timestamp)));
            Some(ExchangeOutcome::new(1))
        };
        let mut e = engine(&oracle);
        let _ = e.refresh(snapshot("10", "100"));
        let Some((delta, ts)) = seen.get() else {
            panic!("oracle not called");
        };
        assert_eq!(delta.tokens1(), -10_000_000);
        assert_eq!(delta.tokens2(), 0);
        assert_eq!(ts, NOW);
    }

    #[test]
    fn positive_payout_scenario() {
        let mut e = engine(|_: &ExchangeRequest<'_>| {
            Some(ExchangeOutcome::new(500_000).with_fee_percent(0.1234))
        });
        let p = e.refresh(snapshot("10", "100")).clone();
        assert_eq!(
            p.text,
            PreviewText::WillReceive {
                amount: "5000.00".to_string(),
                symbol: "GBYTE".to_string()
            }
        );
        assert_eq!(p.display.fee_percent, "0.1234%");
        assert_eq!(p.display.reward_percent, "0%");
        assert!(p.can_submit);
        assert!(p.can_submit_on_enter);
        assert!(!p.display.show_details);
    }

    #[test]
    fn negative_payout_blocks_submit() {
        let mut e = engine(|_: &ExchangeRequest<'_>| Some(ExchangeOutcome::new(-200)));
        let p = e.refresh(snapshot("10", "100"));
        assert_eq!(p.text, PreviewText::PriceImpactTooLarge);
        assert!(!p.can_submit);
        assert!(p.can_submit_on_enter);
    }

    #[test]
    fn rejection_blocks_submit() {
        let mut e = engine(|_: &ExchangeRequest<'_>| None);
        let p = e.refresh(snapshot("10", "100"));
        assert!(p.quote.is_rejected());
        assert!(p.text.is_none());
        assert!(!p.can_submit);
        assert!(!p.can_submit_on_enter);
    }

    #[test]
    fn missing_params_is_not_ready() {
        let calls = Cell::new(0u32);
        let oracle = |_: &ExchangeRequest<'_>| {
            calls.set(calls.get() + 1);
            Some(ExchangeOutcome::new(1))
        };
        let mut e = engine(&oracle);
        let mut s = snapshot("10", "100");
        s.curve_params = None;
        let p = e.refresh(s);
        assert!(p.quote.is_not_ready());
        assert!(!p.can_submit);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn supply_cap_blocks_submit() {
        let mut e = engine(|_: &ExchangeRequest<'_>| Some(ExchangeOutcome::new(10)));
        assert!(!e.refresh(snapshot("101", "100")).can_submit);
        assert!(e.refresh(snapshot("100", "100")).can_submit);
        assert!(e.refresh(snapshot("1000", "")).can_submit);
    }

    #[test]
    fn unchanged_snapshot_is_not_recomputed() {
        let calls = Cell::new(0u32);
        let oracle = |_: &ExchangeRequest<'_>| {
            calls.set(calls.get() + 1);
            Some(ExchangeOutcome::new(1))
        };
        let mut e = engine(&oracle);
        let first = e.refresh(snapshot("10", "100")).clone();
        let second = e.refresh(snapshot("10", "100")).clone();
        assert_eq!(calls.get(), 1);
        assert_eq!(first, second);
        assert_eq!(e.generation(), 1);
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut e = engine(|req: &ExchangeRequest<'_>| {
            Some(ExchangeOutcome::new(-req.trade_delta.tokens1()))
        });
        let Some(old) = e.observe(snapshot("1", "100")) else {
            panic!("expected ticket");
        };
        let Some(new) = e.observe(snapshot("2", "100")) else {
            panic!("expected ticket");
        };
        let old_preview = e.evaluate(&old);
        let new_preview = e.evaluate(&new);
        assert!(e.commit(&new, new_preview.clone()));
        assert!(!e.commit(&old, old_preview));
        assert_eq!(*e.preview(), new_preview);
    }

    #[test]
    fn reset_invalidates_in_flight_ticket() {
        let mut e = engine(|_: &ExchangeRequest<'_>| Some(ExchangeOutcome::new(5)));
        let Some(ticket) = e.observe(snapshot("1", "100")) else {
            panic!("expected ticket");
        };
        let preview = e.evaluate(&ticket);
        e.reset();
        assert!(!e.commit(&ticket, preview));
        assert!(e.preview().is_initial());
        assert!(e.snapshot().is_none());
    }

    #[test]
    fn inversion_follows_params() {
        let mut e = engine(|_: &ExchangeRequest<'_>| {
            Some(ExchangeOutcome::new(10).with_p2(price(4.0)))
        });
        let mut s = snapshot("1", "100");
        s.current_p2 = Some(price(2.0));
        s.curve_params = Some(params("*", None));
        let p = e.refresh(s.clone()).clone();
        assert!(e.price_inversed());
        assert_eq!(p.final_price, Some(price(0.25)));

        s.curve_params = Some(params("*", Some(2.0)));
        let p = e.refresh(s).clone();
        assert!(!e.price_inversed());
        assert_eq!(p.final_price, Some(price(4.0)));
        assert!(p.display.show_details);
    }

    #[test]
    fn zero_reference_price_flags_fault() {
        let mut e = engine(|_: &ExchangeRequest<'_>| {
            Some(ExchangeOutcome::new(10).with_p2(price(1.5)))
        });
        let mut s = snapshot("1", "100");
        s.current_p2 = Some(Price::ZERO);
        let p = e.refresh(s);
        assert!(p.configuration_fault);
        assert!(p.final_price.is_none());
        assert!(p.display.price_change.is_none());
        assert!(p.price_change.is_finite());
    }

    #[test]
    fn supply_helper() {
        let (Ok(a), Ok(b)) = ("5".parse::<TokenAmount>(), "4".parse::<TokenAmount>()) else {
            panic!("bad fixture");
        };
        assert!(within_supply(a, None));
        assert!(!within_supply(a, Some(b)));
        assert!(within_supply(b, Some(a)));
    }
}
