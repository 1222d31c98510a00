//! Locale tables and key lookup.
//!
//! Every table is a flat list of `(key path, template)` pairs. Key paths are
//! namespace segments joined with dots (`footer.sponsor.sponsoredLong`) and
//! templates may carry `{name}` placeholders filled in by [`Translator`].

pub mod catalog;
pub mod en;
pub mod it;
pub mod keys;

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use catalog::{
    LocaleCoverage, Translator, coverage, interpolate, key_path, lookup, missing_keys,
    parse_var, placeholders,
};

/// Environment variable that overrides the detected locale.
pub const ENV_LOCALE: &str = "EVUI_LOCALE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    #[default]
    En,
    It,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::It];

    /// Locale consulted when the active table has no entry for a key.
    pub const FALLBACK: Locale = Locale::En;

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::It => "it",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::It => "Italiano",
        }
    }

    /// Resolves the locale from `EVUI_LOCALE`, then `LANG`, defaulting to English.
    pub fn from_env() -> Self {
        [ENV_LOCALE, "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find_map(|tag| tag.parse().ok())
            .unwrap_or_default()
    }

    /// Parses tags like `it`, `it-IT`, `IT_it` or `it_IT.UTF-8@euro`.
    pub fn parse(tag: &str) -> AppResult<Self> {
        let trimmed = tag.trim();
        let without_modifiers = trimmed
            .split(['.', '@'])
            .next()
            .unwrap_or_default();
        let primary = without_modifiers
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Ok(Self::En),
            "it" => Ok(Self::It),
            _ => Err(AppError::UnsupportedLocale(trimmed.to_string())),
        }
    }

    pub fn messages(&self) -> &'static dyn Messages {
        match self {
            Self::En => &en::English,
            Self::It => &it::Italian,
        }
    }

    pub(crate) fn num_locale(&self) -> num_format::Locale {
        match self {
            Self::En => num_format::Locale::en,
            Self::It => num_format::Locale::it,
        }
    }

    pub(crate) fn chrono_locale(&self) -> chrono::Locale {
        match self {
            Self::En => chrono::Locale::en_US,
            Self::It => chrono::Locale::it_IT,
        }
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = AppError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        Self::parse(&tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.code().to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A static translation table for one locale.
pub trait Messages: Sync {
    fn locale(&self) -> Locale;

    fn entries(&self) -> &'static [(&'static str, &'static str)];
}

/// Messages for the locale detected from the environment.
pub fn current() -> &'static dyn Messages {
    Locale::from_env().messages()
}
