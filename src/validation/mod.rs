//! Amount input validation.
//!
//! [`InputValidator`] checks a raw string against
//! [`ValidationConstraints`] and reports the pass/fail signal to a
//! [`ValidationSink`] exactly once per attempt.

mod constraints;
mod validator;

pub use constraints::ValidationConstraints;
pub use validator::{InputRejection, InputValidator, Validation, ValidationSink};
