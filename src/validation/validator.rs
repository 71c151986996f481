//! Amount-field validator.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use tracing::trace;

use super::ValidationConstraints;
use crate::domain::TokenAmount;

/// Why an entered amount was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputRejection {
    /// Not a number.
    NotANumber,
    /// Smaller than the minimum.
    BelowMinimum,
    /// Larger than the maximum (the redeemable supply).
    AboveMaximum,
    /// More fractional digits than the token supports.
    TooManyDecimals,
}

impl fmt::Display for InputRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => write!(f, "value is not a number"),
            Self::BelowMinimum => write!(f, "value is below the minimum"),
            Self::AboveMaximum => write!(f, "value exceeds the maximum"),
            Self::TooManyDecimals => write!(f, "value has too many decimal places"),
        }
    }
}

/// Result of validating one input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validation {
    /// The value passed; carries the parsed amount.
    Valid(TokenAmount),
    /// Nothing has been entered yet.
    Empty,
    /// The value was refused.
    Invalid(InputRejection),
}

impl Validation {
    /// Returns `true` only for [`Validation::Valid`].
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` for [`Validation::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The parsed amount, when valid.
    #[must_use]
    pub const fn amount(&self) -> Option<TokenAmount> {
        match self {
            Self::Valid(a) => Some(*a),
            Self::Empty | Self::Invalid(_) => None,
        }
    }

    /// The rejection reason, when invalid.
    #[must_use]
    pub const fn rejection(&self) -> Option<InputRejection> {
        match self {
            Self::Invalid(r) => Some(*r),
            Self::Valid(_) | Self::Empty => None,
        }
    }
}

/// Receives the pass/fail signal of a validation.
///
/// [`InputValidator::validate`] calls exactly one of the two methods,
/// exactly once, per validation.
pub trait ValidationSink {
    /// The value passed.
    fn on_success(&mut self);

    /// The value failed (including an empty value).
    fn on_error(&mut self);
}

/// The form's tri-state validity flag: `None` until something is
/// validated, then `Some(true)` / `Some(false)`.
impl ValidationSink for Option<bool> {
    fn on_success(&mut self) {
        *self = Some(true);
    }

    fn on_error(&mut self) {
        *self = Some(false);
    }
}

/// Validates raw amount strings against [`ValidationConstraints`].
///
/// Never panics or errors on partial input: an empty string is a
/// failure reported as [`Validation::Empty`], so callers can tell "not
/// filled in yet" from "wrong".
///
/// # Examples
///
/// ```
/// use bonded_redeem::domain::{Decimals, TokenAmount};
/// use bonded_redeem::validation::{InputRejection, InputValidator, Validation, ValidationConstraints};
///
/// let supply: TokenAmount = "100".parse().expect("numeric");
/// let v = InputValidator::new(ValidationConstraints::for_redemption(
///     Decimals::new(2).expect("valid"),
///     Some(supply),
/// ));
/// let mut valid = None;
/// assert!(v.validate("10.5", &mut valid).is_ok());
/// assert_eq!(valid, Some(true));
/// assert_eq!(v.validate("100.01", &mut valid), Validation::Invalid(InputRejection::AboveMaximum));
/// assert_eq!(valid, Some(false));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputValidator {
    constraints: ValidationConstraints,
}

impl InputValidator {
    /// Creates a validator for the given constraints.
    #[must_use]
    pub const fn new(constraints: ValidationConstraints) -> Self {
        Self { constraints }
    }

    /// The constraints applied.
    #[must_use]
    pub const fn constraints(&self) -> &ValidationConstraints {
        &self.constraints
    }

    /// Validates `raw` and signals the result to `sink` exactly once.
    pub fn validate<S: ValidationSink + ?Sized>(&self, raw: &str, sink: &mut S) -> Validation {
        let result = self.check(raw);
        if result.is_ok() {
            sink.on_success();
        } else {
            sink.on_error();
        }
        trace!(input = raw, ?result, "amount validated");
        result
    }

    /// Parses `raw` the way [`check`](Self::check) does, without applying
    /// any bounds. Returns `None` for empty, non-numeric or negative input.
    #[must_use]
    pub fn parse_amount(raw: &str) -> Option<TokenAmount> {
        parse_number(raw.trim()).and_then(|value| TokenAmount::new(value).ok())
    }

    /// Validates `raw` without signalling anyone.
    #[must_use]
    pub fn check(&self, raw: &str) -> Validation {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Validation::Empty;
        }
        let Some(value) = parse_number(trimmed) else {
            return Validation::Invalid(InputRejection::NotANumber);
        };
        if value < self.constraints.min_value() {
            return Validation::Invalid(InputRejection::BelowMinimum);
        }
        if matches!(self.constraints.max_value(), Some(max) if value > max) {
            return Validation::Invalid(InputRejection::AboveMaximum);
        }
        // Counted on the text: parsing rounds beyond 28 fractional digits.
        if matches!(self.constraints.max_decimals(), Some(max) if fractional_digits(trimmed) > max)
        {
            return Validation::Invalid(InputRejection::TooManyDecimals);
        }
        match TokenAmount::new(value) {
            Ok(amount) => Validation::Valid(amount),
            Err(_) => Validation::Invalid(InputRejection::BelowMinimum),
        }
    }
}

/// Parses plain or scientific decimal notation. A dangling decimal point
/// (`"12."`, typed mid-entry) is accepted as the integer before it.
fn parse_number(s: &str) -> Option<Decimal> {
    let s = s.strip_suffix('.').unwrap_or(s);
    if s.is_empty() || s == "-" || s == "+" {
        return None;
    }
    Decimal::from_str(s)
        .ok()
        .or_else(|| {
            s.contains(['e', 'E'])
                .then(|| Decimal::from_scientific(s).ok())
                .flatten()
        })
}

/// Significant fractional digits of a numeric literal as typed: trailing
/// zeros do not count and an exponent shifts the point.
fn fractional_digits(s: &str) -> u32 {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(i) => (&s[..i], s[i + 1..].parse::<i64>().unwrap_or(0)),
        None => (s, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes())
        .filter(u8::is_ascii_digit)
        .collect();
    let trailing_zeros = digits.iter().rev().take_while(|&&d| d == b'0').count();
    let scale = i64::try_from(frac_part.len())
        .unwrap_or(i64::MAX)
        .saturating_sub(exponent);
    let significant = scale.saturating_sub(i64::try_from(trailing_zeros).unwrap_or(i64::MAX));
    u32::try_from(significant.max(0)).unwrap_or(u32::MAX)
}
