use super::number::format_decimal;
use crate::i18n::Locale;

/// Default currency of the dashboard.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Currencies whose energy prices are shown in cents.
const CENT_CURRENCIES: [&str; 2] = ["EUR", "USD"];

const NBSP: char = '\u{a0}';

/// ISO 4217 minor units.
pub fn minor_units(currency: &str) -> usize {
    match currency {
        "JPY" | "KRW" | "ISK" | "CLP" | "VND" => 0,
        "BHD" | "KWD" | "OMR" | "JOD" | "TND" => 3,
        _ => 2,
    }
}

fn symbol(locale: Locale, currency: &str) -> Option<&'static str> {
    match (locale, currency) {
        (_, "EUR") => Some("€"),
        (_, "GBP") => Some("£"),
        (Locale::En, "USD") => Some("$"),
        (Locale::En, "JPY") => Some("¥"),
        (Locale::En, "INR") => Some("₹"),
        _ => None,
    }
}

/// Amount with currency sign in the locale's placement.
///
/// English puts the sign in front (`€12.50`, `CHF 12.50`), Italian after the
/// number (`12,50 €`). Codes are separated from the number by a no-break space.
pub fn fmt_money(locale: Locale, amount: f64, currency: &str) -> String {
    let code = currency.trim().to_ascii_uppercase();
    let digits = minor_units(&code);
    let number = format_decimal(locale, amount.abs(), digits, digits);
    let negative = amount < 0.0 && number.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let minus = if negative {
        locale.num_locale().minus_sign()
    } else {
        ""
    };

    match locale {
        Locale::En => match symbol(locale, &code) {
            Some(sign) => format!("{}{}{}", minus, sign, number),
            None => format!("{}{}{}{}", minus, code, NBSP, number),
        },
        Locale::It => {
            let sign = symbol(locale, &code).unwrap_or(code.as_str());
            format!("{}{}{}{}", minus, number, NBSP, sign)
        }
    }
}

/// Energy price per kWh: cents for EUR and USD, the plain currency otherwise.
pub fn fmt_price_per_kwh(locale: Locale, amount: f64, currency: &str) -> String {
    let code = currency.trim().to_ascii_uppercase();
    let (value, unit, max_digits) = if CENT_CURRENCIES.contains(&code.as_str()) {
        (amount * 100.0, "ct".to_string(), 1)
    } else {
        (amount, code, 3)
    };
    format!(
        "{} {}/kWh",
        format_decimal(locale, value, 0, max_digits),
        unit
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_in_english() {
        assert_eq!(fmt_money(Locale::En, 12.5, "EUR"), "€12.50");
        assert_eq!(fmt_money(Locale::En, 1234.567, "usd"), "$1,234.57");
        assert_eq!(fmt_money(Locale::En, -3.0, "GBP"), "-£3.00");
        assert_eq!(fmt_money(Locale::En, 7.5, "CHF"), "CHF\u{a0}7.50");
        assert_eq!(fmt_money(Locale::En, 1500.0, "JPY"), "¥1,500");
        assert_eq!(fmt_money(Locale::En, 1500.0, "HUF"), "HUF\u{a0}1,500.00");
    }

    #[test]
    fn minor_units_follow_iso_4217() {
        assert_eq!(minor_units("JPY"), 0);
        assert_eq!(minor_units("HUF"), 2);
        assert_eq!(minor_units("EUR"), 2);
        assert_eq!(minor_units("KWD"), 3);
    }

    #[test]
    fn money_in_italian() {
        assert_eq!(fmt_money(Locale::It, 12.5, "EUR"), "12,50\u{a0}€");
        assert_eq!(fmt_money(Locale::It, 1234.5, "USD"), "1.234,50\u{a0}USD");
        assert_eq!(fmt_money(Locale::It, -0.5, "EUR"), "-0,50\u{a0}€");
    }

    #[test]
    fn money_never_shows_negative_zero() {
        assert_eq!(fmt_money(Locale::En, -0.001, "EUR"), "€0.00");
    }

    #[test]
    fn price_in_cents_for_eur_and_usd() {
        assert_eq!(fmt_price_per_kwh(Locale::En, 0.30, "EUR"), "30 ct/kWh");
        assert_eq!(fmt_price_per_kwh(Locale::It, 0.305, "EUR"), "30,5 ct/kWh");
        assert_eq!(fmt_price_per_kwh(Locale::En, 0.1234, "USD"), "12.3 ct/kWh");
    }

    #[test]
    fn price_in_currency_for_others() {
        assert_eq!(fmt_price_per_kwh(Locale::En, 2.5, "SEK"), "2.5 SEK/kWh");
        assert_eq!(fmt_price_per_kwh(Locale::En, 0.12345, "DKK"), "0.123 DKK/kWh");
        assert_eq!(fmt_price_per_kwh(Locale::It, 1.5, "CHF"), "1,5 CHF/kWh");
    }
}
