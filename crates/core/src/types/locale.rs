//! Supported display locales.
//!
//! The storefront serves Thai and English. The locale is derived from the
//! URL path prefix on every request and passed down explicitly - it is never
//! stored in a session or global.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing an unsupported locale code.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported locale: {0}")]
pub struct LocaleParseError(pub String);

/// A display locale. The set is closed: Thai (default) and English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Th,
    En,
}

impl Locale {
    /// All supported locales, in display order.
    pub const ALL: [Self; 2] = [Self::Th, Self::En];

    /// The two-letter code used in URL paths and CMS queries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Th => "th",
            Self::En => "en",
        }
    }

    /// The other supported locale, used by the language switcher.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Th => Self::En,
            Self::En => Self::Th,
        }
    }

    /// Native-language name shown in the language switcher.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Th => "ไทย",
            Self::En => "English",
        }
    }

    /// BCP 47 tag for the `<html lang>` attribute.
    #[must_use]
    pub const fn lang_tag(self) -> &'static str {
        match self {
            Self::Th => "th",
            Self::En => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "th" => Ok(Self::Th),
            "en" => Ok(Self::En),
            other => Err(LocaleParseError(other.to_string())),
        }
    }
}
