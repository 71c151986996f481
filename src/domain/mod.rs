//! Fundamental value types of the redemption domain.
//!
//! Token amounts, leg selection, curve prices, trade deltas and curve
//! outcomes. All types use newtypes or typed optionals with validated
//! constructors so that invalid states are unrepresentable downstream.

mod decimals;
mod exchange_outcome;
mod price;
mod redemption_request;
mod token_amount;
mod token_type;
mod trade_delta;

pub use decimals::Decimals;
pub use exchange_outcome::{ExchangeOutcome, ExchangeQuote};
pub use price::Price;
pub use redemption_request::RedemptionRequest;
pub use token_amount::TokenAmount;
pub use token_type::TokenType;
pub use trade_delta::TradeDelta;
