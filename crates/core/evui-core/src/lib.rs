//! Localization tables and presentation formatters for the charging dashboard.
//!
//! Two independent halves:
//!
//! - [`i18n`]: static locale tables keyed by dotted key paths
//!   (`main.loadpoint.fallbackName`) with `{name}` placeholder substitution
//!   and English fallback.
//! - [`format`]: pure display helpers for power, durations, dates, money and
//!   relative time, parameterised by the active [`Locale`].

pub mod config;
pub mod env;
pub mod error;
pub mod format;
pub mod i18n;

pub use config::{ConfigManager, FormatConfig};
pub use error::{AppError, AppResult};
pub use format::Formatter;
pub use i18n::{Locale, Translator};
