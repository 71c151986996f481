use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RedeemError;

/// A supported interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Spanish.
    Es,
    /// Russian.
    Ru,
}

impl Locale {
    /// Every supported locale, default first.
    pub const ALL: [Self; 3] = [Self::En, Self::Es, Self::Ru];

    /// Two-letter code used as the path prefix.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Ru => "ru",
        }
    }
}

impl FromStr for Locale {
    type Err = RedeemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or(RedeemError::InvalidConfiguration("unsupported locale"))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Replaces the current location; injected by the shell.
pub trait Navigator {
    /// Navigates to `path` without adding a history entry.
    fn replace(&mut self, path: &str);
}

impl Navigator for Vec<String> {
    fn replace(&mut self, path: &str) {
        self.push(path.to_string());
    }
}

/// Rewrites paths between locale prefixes.
///
/// # Examples
///
/// ```
/// use bonded_redeem::locale::{Locale, LocaleRouter};
///
/// let router = LocaleRouter::default();
/// assert_eq!(router.strip_locale("/ru/trade/X"), "/trade/X");
/// assert_eq!(router.localized_path("/ru/trade/X", Locale::Es), "/es/trade/X");
/// assert_eq!(router.localized_path("/es/trade/X", Locale::En), "/trade/X");
/// assert_eq!(router.localized_path("/es", Locale::En), "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocaleRouter {
    default_locale: Locale,
}

impl LocaleRouter {
    /// Creates a router whose unprefixed paths are in `default_locale`.
    #[must_use]
    pub const fn new(default_locale: Locale) -> Self {
        Self { default_locale }
    }

    /// The locale of unprefixed paths.
    #[must_use]
    pub const fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Locale named by the first segment of `path`, if any.
    #[must_use]
    pub fn locale_of(&self, path: &str) -> Option<Locale> {
        first_segment(path).parse().ok()
    }

    /// `path` without its locale segment.
    #[must_use]
    pub fn strip_locale<'a>(&self, path: &'a str) -> &'a str {
        match self.locale_of(path) {
            Some(locale) => path
                .strip_prefix('/')
                .and_then(|rest| rest.strip_prefix(locale.code()))
                .unwrap_or(path),
            None => path,
        }
    }

    /// `path` rewritten for `locale`: any existing prefix is dropped, the
    /// new one is added unless `locale` is the default, and a bare `/`
    /// remainder collapses to the empty path.
    #[must_use]
    pub fn localized_path(&self, path: &str, locale: Locale) -> String {
        let rest = self.strip_locale(path);
        let rest = if rest == "/" { "" } else { rest };
        if locale == self.default_locale {
            rest.to_string()
        } else {
            format!("/{}{rest}", locale.code())
        }
    }

    /// Switches the shell to `locale`, replacing the current location.
    /// Returns the locale now active.
    pub fn switch<N: Navigator + ?Sized>(&self, path: &str, locale: Locale, navigator: &mut N) -> Locale {
        let target = self.localized_path(path, locale);
        debug!(from = path, to = %target, %locale, "locale switched");
        navigator.replace(&target);
        locale
    }
}

fn first_segment(path: &str) -> &str {
    path.trim_start_matches('/').split('/').next().unwrap_or("")
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parse_codes() {
        assert_eq!("es".parse::<Locale>(), Ok(Locale::Es));
        assert!("de".parse::<Locale>().is_err());
        assert_eq!(Locale::Ru.to_string(), "ru");
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn strip_only_known_prefixes() {
        let r = LocaleRouter::default();
        assert_eq!(r.strip_locale("/es/trade"), "/trade");
        assert_eq!(r.strip_locale("/es"), "");
        assert_eq!(r.strip_locale("/trade/es"), "/trade/es");
        assert_eq!(r.strip_locale("/escape"), "/escape");
        assert_eq!(r.strip_locale("/"), "/");
    }

    #[test]
    fn localize_paths() {
        let r = LocaleRouter::default();
        assert_eq!(r.localized_path("/trade", Locale::Ru), "/ru/trade");
        assert_eq!(r.localized_path("/", Locale::Ru), "/ru");
        assert_eq!(r.localized_path("/", Locale::En), "");
        assert_eq!(r.localized_path("/ru/", Locale::En), "");
    }

    #[test]
    fn custom_default() {
        let r = LocaleRouter::new(Locale::Es);
        assert_eq!(r.localized_path("/trade", Locale::Es), "/trade");
        assert_eq!(r.localized_path("/trade", Locale::En), "/en/trade");
    }

    #[test]
    fn switch_navigates() {
        let r = LocaleRouter::default();
        let mut history: Vec<String> = Vec::new();
        let active = r.switch("/es/faq", Locale::Ru, &mut history);
        assert_eq!(active, Locale::Ru);
        assert_eq!(history, vec!["/ru/faq".to_string()]);
    }

    #[test]
    fn serde_lowercase() {
        let Ok(json) = serde_json::to_string(&Locale::Es) else {
            panic!("serializable");
        };
        assert_eq!(json, "\"es\"");
    }
}
