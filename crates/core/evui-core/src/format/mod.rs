//! Display helpers used by the dashboard views.
//!
//! [`Formatter`] bundles the active locale with the kilo-scale settings and
//! exposes every helper as a method. The locale-independent pieces are also
//! available as free functions in the submodules.

pub mod date;
pub mod duration;
pub mod money;
pub mod number;
pub mod relative;

use crate::config::FormatConfig;
use crate::i18n::Locale;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

pub use duration::{NO_DURATION, fmt_duration, fmt_short_duration, fmt_short_duration_unit};
pub use number::{format_decimal, round};
pub use relative::TimeUnit;

/// Magnitude from which [`Formatter::fmt`] switches to kilo-scale.
pub const FMT_LIMIT: f64 = 100.0;

/// Fraction digits of kilo-scale values.
pub const FMT_DIGITS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Formatter {
    locale: Locale,
    limit: f64,
    digits: u32,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl Formatter {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            limit: FMT_LIMIT,
            digits: FMT_DIGITS,
        }
    }

    pub fn from_config(config: &FormatConfig) -> Self {
        Self {
            locale: config.locale,
            limit: config.fmt_limit,
            digits: config.fmt_digits,
        }
    }

    pub fn with_limit(mut self, limit: f64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_digits(mut self, digits: u32) -> Self {
        self.digits = digits;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn round(&self, num: f64, precision: u32) -> String {
        round(num, precision)
    }

    /// Absolute value, divided by 1000 once it reaches the kilo limit.
    ///
    /// Missing input renders as `0`. Pair with [`Formatter::fmt_unit`] for the
    /// matching `k` prefix.
    pub fn fmt(&self, val: Option<f64>) -> String {
        let Some(val) = val else {
            return "0".to_string();
        };
        let val = val.abs();
        if val >= self.limit {
            round(val / 1e3, self.digits)
        } else {
            round(val, 0)
        }
    }

    pub fn fmt_unit(&self, val: f64) -> &'static str {
        if val.abs() >= self.limit { "k" } else { "" }
    }

    /// Power in kW with one digit, or in W with none.
    ///
    /// Small negative values keep their sign (`-0.0 kW`).
    pub fn fmt_kw(&self, watt: f64, kw: bool, with_unit: bool) -> String {
        let (value, digits, unit) = if kw {
            (watt / 1000.0, 1, " kW")
        } else {
            (watt, 0, " W")
        };
        let mut out = format_decimal(self.locale, value, digits, digits);
        if with_unit {
            out.push_str(unit);
        }
        out
    }

    pub fn fmt_duration(&self, seconds: Option<i64>) -> String {
        fmt_duration(seconds)
    }

    pub fn fmt_short_duration(&self, seconds: i64, with_unit: bool) -> String {
        fmt_short_duration(seconds, with_unit)
    }

    pub fn fmt_short_duration_unit(&self, seconds: i64) -> &'static str {
        fmt_short_duration_unit(seconds)
    }

    pub fn fmt_day_string<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        date::fmt_day_string(date)
    }

    pub fn fmt_time_string<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        date::fmt_time_string(date)
    }

    pub fn fmt_absolute_date<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        date::fmt_absolute_date(self.locale, date)
    }

    pub fn fmt_money(&self, amount: f64, currency: &str) -> String {
        money::fmt_money(self.locale, amount, currency)
    }

    pub fn fmt_price_per_kwh(&self, amount: f64, currency: &str) -> String {
        money::fmt_price_per_kwh(self.locale, amount, currency)
    }

    /// Relative phrase for a signed offset in milliseconds (negative is past).
    pub fn fmt_time_ago(&self, elapsed_ms: i64) -> String {
        relative::fmt_time_ago(self.locale, elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_switches_to_kilo_scale() {
        let f = Formatter::default();
        assert_eq!(f.fmt(Some(150.0)), "0.2");
        assert_eq!(f.fmt(Some(50.0)), "50");
        assert_eq!(f.fmt(Some(99.6)), "100");
        assert_eq!(f.fmt(Some(100.0)), "0.1");
        assert_eq!(f.fmt(Some(-2500.0)), "2.5");
        assert_eq!(f.fmt(None), "0");
    }

    #[test]
    fn fmt_unit_tracks_limit() {
        let f = Formatter::default();
        assert_eq!(f.fmt_unit(150.0), "k");
        assert_eq!(f.fmt_unit(-150.0), "k");
        assert_eq!(f.fmt_unit(50.0), "");
        assert_eq!(f.fmt_unit(100.0), "k");
    }

    #[test]
    fn custom_limit_and_digits() {
        let f = Formatter::default().with_limit(1000.0).with_digits(2);
        assert_eq!(f.fmt(Some(999.0)), "999");
        assert_eq!(f.fmt(Some(1234.0)), "1.23");
        assert_eq!(f.fmt_unit(999.0), "");
    }

    #[test]
    fn fmt_kw_in_both_units() {
        let en = Formatter::new(Locale::En);
        assert_eq!(en.fmt_kw(11000.0, true, true), "11.0 kW");
        assert_eq!(en.fmt_kw(1234.0, false, true), "1,234 W");
        assert_eq!(en.fmt_kw(1550.0, true, false), "1.6");

        let it = Formatter::new(Locale::It);
        assert_eq!(it.fmt_kw(3680.0, true, true), "3,7 kW");
        assert_eq!(it.fmt_kw(1234.0, false, true), "1.234 W");
    }

    #[test]
    fn fmt_kw_keeps_sign_of_small_feed_in() {
        let en = Formatter::new(Locale::En);
        assert_eq!(en.fmt_kw(-40.0, true, true), "-0.0 kW");
        assert_eq!(en.fmt_kw(-1500.0, true, false), "-1.5");
    }

    #[test]
    fn huge_digit_setting_does_not_panic() {
        let f = Formatter::default().with_digits(2_147_483_648);
        assert_eq!(f.fmt(Some(1500.0)), format!("{:.20}", 1.5));
    }

    #[test]
    fn delegates_keep_locale() {
        let it = Formatter::new(Locale::It);
        assert_eq!(it.locale(), Locale::It);
        assert_eq!(it.fmt_time_ago(-120_000), "2 minuti fa");
        assert_eq!(it.fmt_short_duration(3725, true), "1:02h");
    }
}
