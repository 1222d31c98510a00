//! Shared fixtures for the workspace integration tests.

use chrono::{DateTime, FixedOffset, TimeZone};
use evui_core::i18n::{Locale, Messages};

/// A wall-clock time in a fixed zone, so rendering does not depend on the host.
pub fn at(offset_hours: i32, ymd: (i32, u32, u32), hm: (u32, u32)) -> DateTime<FixedOffset> {
    let zone = FixedOffset::east_opt(offset_hours * 3600).expect("offset in range");
    zone.with_ymd_and_hms(ymd.0, ymd.1, ymd.2, hm.0, hm.1, 0)
        .single()
        .expect("unambiguous local time")
}

/// Every key path of a locale table.
pub fn keys_of(locale: Locale) -> Vec<&'static str> {
    locale
        .messages()
        .entries()
        .iter()
        .map(|(key, _)| *key)
        .collect()
}
