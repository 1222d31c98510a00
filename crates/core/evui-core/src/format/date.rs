use crate::i18n::Locale;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// `YYYY-MM-DD` in the date's own time zone.
pub fn fmt_day_string<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%Y-%m-%d").to_string()
}

/// `HH:MM` (24h) in the date's own time zone.
pub fn fmt_time_string<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%H:%M").to_string()
}

/// Short weekday plus time of day, e.g. `lun 14:05` or `Mon 2:05 PM`.
pub fn fmt_absolute_date<Tz: TimeZone>(locale: Locale, date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    let pattern = match locale {
        Locale::En => "%a %-I:%M %p",
        Locale::It => "%a %H:%M",
    };
    date.format_localized(pattern, locale.chrono_locale())
        .to_string()
}
