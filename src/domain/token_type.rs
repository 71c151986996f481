//! Growth / interest leg selector.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RedeemError;

/// Which derivative leg of the bonded stablecoin is being redeemed.
///
/// The numeric codes (`1` and `2`) match the protocol's own numbering:
/// the curve state keys its assets as `asset1`/`asset2` and the curve
/// parameters key precisions as `decimals1`/`decimals2`.
///
/// # Examples
///
/// ```
/// use bonded_redeem::domain::TokenType;
///
/// let t = TokenType::try_from(2u8).expect("valid code");
/// assert_eq!(t, TokenType::Interest);
/// assert_eq!(t.label(), "interest");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum TokenType {
    /// Token 1: the growth token.
    Growth = 1,
    /// Token 2: the interest token.
    Interest = 2,
}

impl TokenType {
    /// Returns the protocol code (`1` or `2`).
    #[must_use]
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Returns the lowercase human label used in input placeholders.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Growth => "growth",
            Self::Interest => "interest",
        }
    }

    /// Returns `true` for [`TokenType::Growth`].
    #[must_use]
    pub const fn is_growth(&self) -> bool {
        matches!(self, Self::Growth)
    }

    /// Returns `true` for [`TokenType::Interest`].
    #[must_use]
    pub const fn is_interest(&self) -> bool {
        matches!(self, Self::Interest)
    }
}

impl TryFrom<u8> for TokenType {
    type Error = RedeemError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Growth),
            2 => Ok(Self::Interest),
            other => Err(RedeemError::InvalidTokenType(other)),
        }
    }
}

impl From<TokenType> for u8 {
    fn from(t: TokenType) -> Self {
        t.code()
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tokens{}", self.code())
    }
}
