//! Property-based tests for the preview engine.
//!
//! 1. **Validator bounds**: amounts in `(0, supply]` at the token
//!    precision pass; larger or finer amounts fail.
//! 2. **Idempotence**: evaluating one snapshot twice yields the same figures.
//! 3. **Monotonic reset**: retargeting always restores the initial preview.
//! 4. **Price inversion**: multiplicative unleveraged curves display
//!    reciprocals; leveraged ones do not.
//! 5. **Submission gating**: `can_submit` follows payout sign and supply.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{FormEvent, PreviewEngine, RedeemForm, TriggerSnapshot};
use crate::config::{CurveParameters, CurveState, RedeemConfig};
use crate::domain::{Decimals, ExchangeOutcome, Price, TokenAmount, TokenType};
use crate::traits::{ExchangeRequest, FixedClock};
use crate::validation::{InputRejection, InputValidator, Validation, ValidationConstraints};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

type Oracle = fn(&ExchangeRequest<'_>) -> Option<ExchangeOutcome>;

fn params(op: &str, leverage: Option<f64>) -> CurveParameters {
    let leverage = leverage.map_or(String::new(), |l| format!(r#","leverage":{l}"#));
    let json = format!(
        r#"{{"reserve_asset":"base","reserve_asset_decimals":4,"decimals1":6,"decimals2":4,"op1":"{op}"{leverage}}}"#
    );
    match CurveParameters::from_json(&json) {
        Ok(p) => p,
        Err(e) => panic!("params should parse: {e}"),
    }
}

fn amount(units: i64, scale: u32) -> TokenAmount {
    let Ok(a) = TokenAmount::new(Decimal::new(units, scale)) else {
        panic!("non-negative amount");
    };
    a
}

fn price(v: f64) -> Price {
    let Ok(p) = Price::new(v) else {
        panic!("valid price");
    };
    p
}

fn linear(req: &ExchangeRequest<'_>) -> Option<ExchangeOutcome> {
    let burned = -req.trade_delta.tokens1();
    Some(ExchangeOutcome::new(burned / 3).with_fee_percent(0.3))
}

fn snapshot(amount: TokenAmount, supply: Option<TokenAmount>, params: CurveParameters) -> TriggerSnapshot {
    let mut s = TriggerSnapshot::new(TokenType::Growth);
    s.amount = Some(amount);
    s.supply = supply;
    s.decimals = Some(params.decimals1);
    s.valid = Some(true);
    s.address = Some("CURVE".to_string());
    s.curve_params = Some(params);
    s.curve_state = Some(CurveState::default());
    s
}

fn engine<O: crate::traits::ExchangeOracle>(oracle: O) -> PreviewEngine<O, FixedClock> {
    PreviewEngine::with_clock(oracle, FixedClock(1_700_000_000), RedeemConfig::default())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Token precisions commonly seen on curves.
fn decimals_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

/// Supply in base units, at least two units.
fn supply_units_strategy() -> impl Strategy<Value = i64> {
    2i64..=1_000_000_000i64
}

/// Prices in `[0.01, 100]`.
fn price_strategy() -> impl Strategy<Value = f64> {
    (1u32..=10_000u32).prop_map(|v| f64::from(v) / 100.0)
}

// ---------------------------------------------------------------------------
// Property 1: Validator bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_validator_accepts_within_supply(
        d in decimals_strategy(),
        supply_units in supply_units_strategy(),
        pick in 0.0f64..=1.0f64,
    ) {
        let Ok(decimals) = Decimals::new(d) else {
            panic!("valid decimals");
        };
        let scale = u32::from(d);
        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        let units = ((supply_units as f64 * pick) as i64).clamp(1, supply_units);
        let v = InputValidator::new(ValidationConstraints::for_redemption(
            decimals,
            Some(amount(supply_units, scale)),
        ));
        let input = amount(units, scale).to_string();
        prop_assert!(v.check(&input).is_ok(), "{} should pass", input);
    }

    #[test]
    fn prop_validator_rejects_above_supply(
        d in decimals_strategy(),
        supply_units in supply_units_strategy(),
        extra in 1i64..=1_000i64,
    ) {
        let Ok(decimals) = Decimals::new(d) else {
            panic!("valid decimals");
        };
        let scale = u32::from(d);
        let v = InputValidator::new(ValidationConstraints::for_redemption(
            decimals,
            Some(amount(supply_units, scale)),
        ));
        let input = amount(supply_units + extra, scale).to_string();
        prop_assert_eq!(v.check(&input), Validation::Invalid(InputRejection::AboveMaximum));
    }

    #[test]
    fn prop_validator_rejects_extra_digits(
        d in decimals_strategy(),
        supply_units in supply_units_strategy(),
        digit in 1i64..=9i64,
    ) {
        let Ok(decimals) = Decimals::new(d) else {
            panic!("valid decimals");
        };
        let scale = u32::from(d);
        let v = InputValidator::new(ValidationConstraints::for_redemption(
            decimals,
            Some(amount(supply_units, scale)),
        ));
        // One base unit plus a sub-unit digit: inside the bounds, one digit too fine.
        let input = amount(10 + digit, scale + 1).to_string();
        prop_assert_eq!(v.check(&input), Validation::Invalid(InputRejection::TooManyDecimals));
    }
}

// ---------------------------------------------------------------------------
// Property 2: Idempotence
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_evaluate_is_idempotent(units in 1i64..=1_000_000_000i64) {
        let mut e = engine(linear as Oracle);
        let Some(ticket) = e.observe(snapshot(amount(units, 6), None, params("/", None))) else {
            panic!("first observe issues a ticket");
        };
        let a = e.evaluate(&ticket);
        let b = e.evaluate(&ticket);
        prop_assert!(a.same_figures(&b));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_refresh_with_same_snapshot_is_stable(units in 1i64..=1_000_000_000i64) {
        let mut e = engine(linear as Oracle);
        let s = snapshot(amount(units, 6), None, params("/", None));
        let first = e.refresh(s.clone()).clone();
        let generation = e.generation();
        let second = e.refresh(s).clone();
        prop_assert_eq!(first, second);
        prop_assert_eq!(e.generation(), generation);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Monotonic reset
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_retarget_restores_initial(
        inputs in proptest::collection::vec("[0-9]{0,4}(\\.[0-9]{0,8})?", 1..6),
        switch_leg in any::<bool>(),
    ) {
        let mut form = RedeemForm::with_engine(engine(linear as Oracle), TokenType::Growth);
        let _ = form.handle(FormEvent::TargetChanged {
            address: "CURVE".to_string(),
            token_type: TokenType::Growth,
        });
        let _ = form.handle(FormEvent::CurveParamsChanged { params: Some(params("/", None)) });
        let _ = form.handle(FormEvent::CurveStateChanged { state: Some(CurveState::default()) });
        for raw in inputs {
            let _ = form.handle(FormEvent::AmountChanged { raw });
        }
        let (address, token_type) = if switch_leg {
            ("CURVE".to_string(), TokenType::Interest)
        } else {
            ("OTHER".to_string(), TokenType::Growth)
        };
        let changed = form.handle(FormEvent::TargetChanged { address, token_type });
        prop_assert!(changed);
        prop_assert_eq!(form.valid(), None);
        prop_assert!(form.preview().is_initial());
    }
}

// ---------------------------------------------------------------------------
// Property 4: Price inversion
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_inversion_is_reciprocal(
        p2 in price_strategy(),
        current in price_strategy(),
        leverage in prop_oneof![Just(None), (1u32..=5u32).prop_map(|l| Some(f64::from(l)))],
    ) {
        let oracle = move |_: &ExchangeRequest<'_>| {
            Some(ExchangeOutcome::new(1).with_p2(price(p2)).with_target_p2(price(p2)))
        };
        let mut e = engine(oracle);
        let mut s = snapshot(amount(1, 0), None, params("*", leverage));
        s.current_p2 = Some(price(current));
        let preview = e.refresh(s).clone();
        let Some(shown) = preview.final_price else {
            panic!("tracked price present");
        };
        let expected = if leverage.is_some() { p2 } else { 1.0 / p2 };
        prop_assert!((shown.get() - expected).abs() < 1e-12);
        prop_assert!(preview.target_deviation_percent.abs() < 1e-9);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Submission gating
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_can_submit_gate(
        payout in -1_000_000i64..=1_000_000i64,
        units in 1i64..=1_000i64,
        supply_units in 1i64..=1_000i64,
        rejected in any::<bool>(),
    ) {
        let oracle = move |_: &ExchangeRequest<'_>| {
            (!rejected).then(|| ExchangeOutcome::new(i128::from(payout)))
        };
        let mut e = engine(oracle);
        let preview = e
            .refresh(snapshot(amount(units, 0), Some(amount(supply_units, 0)), params("/", None)))
            .clone();
        let expected = !rejected && payout >= 0 && units <= supply_units;
        prop_assert_eq!(preview.can_submit, expected);
        if payout < 0 && !rejected {
            prop_assert!(!preview.can_submit);
            prop_assert_eq!(preview.text, super::PreviewText::PriceImpactTooLarge);
        }
    }
}
