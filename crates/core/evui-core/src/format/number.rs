use crate::i18n::Locale;
use fixed_decimal::{Decimal, FloatPrecision, SignedRoundingMode, UnsignedRoundingMode};
use num_format::ToFormattedString;

/// Most fraction digits any formatter renders.
pub const MAX_DIGITS: u32 = 20;

/// Rounds half towards positive infinity, like `Math.round`.
pub(crate) fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Rounds `num` to `precision` decimals and renders exactly that many digits.
///
/// `precision` is capped at [`MAX_DIGITS`].
pub fn round(num: f64, precision: u32) -> String {
    let precision = precision.min(MAX_DIGITS);
    let base = 10f64.powi(precision as i32);
    let rounded = round_half_up(num * base) / base;
    // -0.0 would render as "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", precision as usize, rounded)
}

/// Locale-aware decimal rendering with between `min_frac` and `max_frac`
/// fraction digits.
///
/// Rounding works on the shortest decimal representation of `value`, half
/// away from zero, so `1.005` becomes `1.01` at two digits. A negative value
/// keeps its sign even when it rounds to zero (`-0.0`). Integer digits are
/// grouped with the locale's separator and grouping style.
pub fn format_decimal(locale: Locale, value: f64, min_frac: usize, max_frac: usize) -> String {
    let num_locale = locale.num_locale();
    if value.is_nan() {
        return num_locale.nan().to_string();
    }
    let sign = if value.is_sign_negative() {
        num_locale.minus_sign()
    } else {
        ""
    };
    if value.is_infinite() {
        return format!("{}{}", sign, num_locale.infinity());
    }

    let mut decimal = match Decimal::try_from_f64(value.abs(), FloatPrecision::RoundTrip) {
        Ok(decimal) => decimal,
        Err(_) => return value.to_string(),
    };
    let min_frac = min_frac.min(MAX_DIGITS as usize) as i16;
    let max_frac = (max_frac.min(MAX_DIGITS as usize) as i16).max(min_frac);
    if *decimal.magnitude_range().start() < -max_frac {
        decimal.round_with_mode(
            -max_frac,
            SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand),
        );
    }
    decimal.trim_end();
    decimal.pad_end(-min_frac);

    let plain = decimal.to_string();
    let (int_digits, frac_digits) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
    // Beyond u128 the digits stay ungrouped
    let grouped = match int_digits.parse::<u128>() {
        Ok(int) => int.to_formatted_string(&num_locale),
        Err(_) => int_digits.to_string(),
    };

    let mut out = format!("{}{}", sign, grouped);
    if !frac_digits.is_empty() {
        out.push_str(num_locale.decimal());
        out.push_str(frac_digits);
    }
    out
}
