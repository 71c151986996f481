//! Locale path prefixes.
//!
//! The shell keeps the active language as the first path segment (`/es/…`),
//! except for the default language, which has no prefix. [`LocaleRouter`]
//! rewrites paths between languages; the current language and the
//! navigation capability are passed in, never read from globals.

mod router;

pub use router::{Locale, LocaleRouter, Navigator};
