use evui_core::format::{self, Formatter};
use evui_core::i18n::Locale;
use evui_test::at;

#[test]
fn durations() {
    let f = Formatter::default();
    assert_eq!(f.fmt_duration(Some(0)), "—");
    assert_eq!(f.fmt_duration(Some(-5)), "—");
    assert_eq!(f.fmt_duration(None), "—");
    assert_eq!(f.fmt_duration(Some(3661)), "01:01:01");

    assert_eq!(f.fmt_short_duration(45, false), "45");
    assert_eq!(f.fmt_short_duration(45, true), "45s");
    assert_eq!(f.fmt_short_duration(125, false), "2:05");
    assert_eq!(f.fmt_short_duration(125, true), "2:05m");
    assert_eq!(f.fmt_short_duration(3725, false), "1:02");
    assert_eq!(f.fmt_short_duration(3725, true), "1:02h");
    assert_eq!(f.fmt_short_duration_unit(0), "");
}

#[test]
fn kilo_scale() {
    let f = Formatter::default();
    assert_eq!(f.fmt(Some(150.0)), "0.2");
    assert_eq!(f.fmt(Some(50.0)), "50");
    assert_eq!(f.fmt_unit(150.0), "k");
    assert_eq!(f.fmt_unit(50.0), "");
}

#[test]
fn round_is_idempotent_at_two_digits() {
    let f = Formatter::default();
    let mut num = -50.0;
    while num < 50.0 {
        let once = f.round(num, 2);
        assert_eq!(f.round(once.parse().unwrap(), 2), once, "{}", num);
        num += 0.137;
    }
}

#[test]
fn price_per_kwh_in_cents() {
    let it = Formatter::new(Locale::It);
    assert_eq!(it.fmt_price_per_kwh(0.30, "EUR"), "30 ct/kWh");
    assert_eq!(it.fmt_price_per_kwh(0.2849, "EUR"), "28,5 ct/kWh");
    assert_eq!(it.fmt_price_per_kwh(1.2345, "NOK"), "1,235 NOK/kWh");
}

#[test]
fn money_and_power_follow_locale() {
    let en = Formatter::new(Locale::En);
    let it = Formatter::new(Locale::It);
    assert_eq!(en.fmt_money(1234.5, "EUR"), "€1,234.50");
    assert_eq!(it.fmt_money(1234.5, "EUR"), "1.234,50\u{a0}€");
    assert_eq!(en.fmt_kw(7400.0, true, true), "7.4 kW");
    assert_eq!(it.fmt_kw(7400.0, true, true), "7,4 kW");
    assert_eq!(it.fmt_kw(7400.0, false, false), "7.400");
}

#[test]
fn dates_render_in_their_zone() {
    let f = Formatter::new(Locale::It);
    let date = at(2, (2024, 6, 3), (7, 4));
    assert_eq!(f.fmt_day_string(&date), "2024-06-03");
    assert_eq!(f.fmt_time_string(&date), "07:04");
    assert_eq!(f.fmt_absolute_date(&date), "lun 07:04");
    assert_eq!(Formatter::new(Locale::En).fmt_absolute_date(&date), "Mon 7:04 AM");
}

#[test]
fn time_ago_both_directions() {
    let en = Formatter::new(Locale::En);
    let it = Formatter::new(Locale::It);
    assert_eq!(en.fmt_time_ago(-45_000), "45 seconds ago");
    assert_eq!(it.fmt_time_ago(-45_000), "45 secondi fa");
    assert_eq!(en.fmt_time_ago(2 * 3_600_000 + 1), "in 2 hours");
    assert_eq!(it.fmt_time_ago(2 * 3_600_000 + 1), "tra 2 ore");
    assert_eq!(format::fmt_duration(Some(90_000)), "25:00:00");
}
