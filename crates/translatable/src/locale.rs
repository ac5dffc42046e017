use crate::config::Config;
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

///
/// Locale
///
/// Locale identifier of the general shape `language[-REGION]`.
/// Identifiers are carried verbatim; normalization happens only when a
/// column suffix is derived. Malformed identifiers pass through
/// mechanically.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    /// Identifier as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Language subtag: the substring before the first `-`, or the whole
    /// identifier when no region is present.
    #[must_use]
    pub fn language(&self) -> &str {
        self.0
            .split_once('-')
            .map_or(self.0.as_str(), |(language, _)| language)
    }

    /// Column suffix for this locale under the given configuration.
    ///
    /// Full-locale mode lowercases the identifier and maps every `-` to
    /// `_` (`nl-BE` → `nl_be`); language-only mode keeps the language
    /// subtag verbatim (`nl-BE` → `nl`).
    #[must_use]
    pub fn column_suffix(&self, config: &Config) -> String {
        if config.full_locale {
            self.0.to_lowercase().replace('-', "_")
        } else {
            self.language().to_string()
        }
    }
}

impl From<&str> for Locale {
    fn from(identifier: &str) -> Self {
        Self::new(identifier)
    }
}

impl From<String> for Locale {
    fn from(identifier: String) -> Self {
        Self(identifier)
    }
}

///
/// LocaleContext
///
/// Per-operation locale state: the locale currently in effect and the
/// configured fallback. "Current" persists for the life of one logical
/// operation; hosts scope a context per request instead of mutating
/// process-global state.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LocaleContext {
    current: Locale,
    default: Locale,
}

impl LocaleContext {
    #[must_use]
    pub fn new(current: impl Into<Locale>, default: impl Into<Locale>) -> Self {
        Self {
            current: current.into(),
            default: default.into(),
        }
    }

    /// Locale currently in effect.
    #[must_use]
    pub const fn current(&self) -> &Locale {
        &self.current
    }

    /// Configured fallback locale.
    #[must_use]
    pub const fn default_locale(&self) -> &Locale {
        &self.default
    }

    pub fn set_current(&mut self, locale: impl Into<Locale>) {
        self.current = locale.into();
    }

    pub fn set_default(&mut self, locale: impl Into<Locale>) {
        self.default = locale.into();
    }
}
