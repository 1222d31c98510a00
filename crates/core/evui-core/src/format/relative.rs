use super::number::{format_decimal, round_half_up};
use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Day,
    Hour,
    Minute,
    Second,
}

impl TimeUnit {
    /// Largest first.
    pub const ALL: [TimeUnit; 4] = [Self::Day, Self::Hour, Self::Minute, Self::Second];

    pub fn millis(&self) -> i64 {
        match self {
            Self::Day => 24 * 60 * 60 * 1000,
            Self::Hour => 60 * 60 * 1000,
            Self::Minute => 60 * 1000,
            Self::Second => 1000,
        }
    }

    fn noun(&self, locale: Locale, count: u64) -> &'static str {
        let one = count == 1;
        match (locale, self) {
            (Locale::En, Self::Day) => if one { "day" } else { "days" },
            (Locale::En, Self::Hour) => if one { "hour" } else { "hours" },
            (Locale::En, Self::Minute) => if one { "minute" } else { "minutes" },
            (Locale::En, Self::Second) => if one { "second" } else { "seconds" },
            (Locale::It, Self::Day) => if one { "giorno" } else { "giorni" },
            (Locale::It, Self::Hour) => if one { "ora" } else { "ore" },
            (Locale::It, Self::Minute) => if one { "minuto" } else { "minuti" },
            (Locale::It, Self::Second) => if one { "secondo" } else { "secondi" },
        }
    }

    /// Words replacing small offsets, e.g. `yesterday` for -1 day.
    fn idiom(&self, locale: Locale, value: i64) -> Option<&'static str> {
        let phrase = match (locale, self, value) {
            (Locale::En, Self::Day, -1) => "yesterday",
            (Locale::En, Self::Day, 0) => "today",
            (Locale::En, Self::Day, 1) => "tomorrow",
            (Locale::En, Self::Hour, 0) => "this hour",
            (Locale::En, Self::Minute, 0) => "this minute",
            (Locale::En, Self::Second, 0) => "now",
            (Locale::It, Self::Day, -2) => "l’altro ieri",
            (Locale::It, Self::Day, -1) => "ieri",
            (Locale::It, Self::Day, 0) => "oggi",
            (Locale::It, Self::Day, 1) => "domani",
            (Locale::It, Self::Day, 2) => "dopodomani",
            (Locale::It, Self::Hour, 0) => "quest’ora",
            (Locale::It, Self::Minute, 0) => "questo minuto",
            (Locale::It, Self::Second, 0) => "ora",
            _ => return None,
        };
        Some(phrase)
    }
}

/// Relative phrase for `value` units away from now; negative is the past.
pub fn fmt_relative(locale: Locale, value: i64, unit: TimeUnit) -> String {
    if let Some(idiom) = unit.idiom(locale, value) {
        return idiom.to_string();
    }

    let count = value.unsigned_abs();
    let amount = format_decimal(locale, count as f64, 0, 0);
    let noun = unit.noun(locale, count);
    match (locale, value < 0) {
        (Locale::En, true) => format!("{} {} ago", amount, noun),
        (Locale::En, false) => format!("in {} {}", amount, noun),
        (Locale::It, true) => format!("{} {} fa", amount, noun),
        (Locale::It, false) => format!("tra {} {}", amount, noun),
    }
}

/// Picks the largest unit the elapsed milliseconds exceed and phrases it.
pub fn fmt_time_ago(locale: Locale, elapsed_ms: i64) -> String {
    let magnitude = elapsed_ms.unsigned_abs();
    let unit = TimeUnit::ALL
        .into_iter()
        .find(|unit| magnitude > unit.millis() as u64)
        .unwrap_or(TimeUnit::Second);

    let value = round_half_up(elapsed_ms as f64 / unit.millis() as f64) as i64;
    fmt_relative(locale, value, unit)
}
