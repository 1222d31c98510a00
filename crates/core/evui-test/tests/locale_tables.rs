use evui_core::i18n::{self, Locale, Messages, Translator, keys, placeholders};
use evui_test::keys_of;
use std::collections::HashSet;

#[test]
fn referenced_keys_resolve_in_every_locale() {
    for locale in Locale::ALL {
        let translator = Translator::new(locale);
        for key in keys::ALL {
            let text = translator.try_translate(key, &[]).unwrap();
            assert!(!text.is_empty(), "{} is empty in {}", key, locale);
            assert!(i18n::lookup(locale, key).is_some(), "{} not in {} table", key, locale);
        }
    }
}

#[test]
fn tables_share_one_key_set() {
    let en: HashSet<_> = keys_of(Locale::En).into_iter().collect();
    let it: HashSet<_> = keys_of(Locale::It).into_iter().collect();
    assert_eq!(en, it);
}

#[test]
fn tables_have_no_duplicate_keys() {
    for locale in Locale::ALL {
        let keys = keys_of(locale);
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(keys.len(), unique.len(), "duplicate key in {}", locale);
    }
}

#[test]
fn key_paths_are_well_formed() {
    for locale in Locale::ALL {
        for key in keys_of(locale) {
            assert!(
                key.split('.').all(|segment| !segment.is_empty()
                    && segment.chars().all(|c| c.is_ascii_alphanumeric())),
                "malformed key path {}",
                key
            );
        }
    }
}

#[test]
fn templates_are_non_empty_and_agree_on_placeholders() {
    for (key, en_template) in Locale::En.messages().entries() {
        let it_template = i18n::lookup(Locale::It, key).unwrap();
        assert!(!en_template.is_empty() && !it_template.is_empty(), "{}", key);

        let mut en_names = placeholders(en_template);
        let mut it_names = placeholders(it_template);
        en_names.sort_unstable();
        it_names.sort_unstable();
        assert_eq!(en_names, it_names, "placeholders differ for {}", key);
    }
}

#[test]
fn italian_strings_from_the_dashboard() {
    let it = Translator::new(Locale::It);
    assert_eq!(it.t("header.docs"), "Documentazione");
    assert_eq!(it.t("notifications.dismissAll"), "Rimuovi tutte");
    assert_eq!(it.t("main.mode.minpv"), "Min+FV");
    assert_eq!(it.t(keys::LOADPOINT_FALLBACK_NAME), "Punto di carica");
    assert_eq!(
        it.translate(keys::VEHICLE_MIN_CHARGE, &[("soc", "80")]),
        "carica minima fino a 80%"
    );
    assert_eq!(
        it.translate("main.loadpoint.remoteDisabledSoft", &[("source", "Sunny Home")]),
        "Sunny Home: Ricarica FV adattiva disabilitata"
    );
}

#[test]
fn coverage_reports_full_tables() {
    let reports = i18n::coverage();
    assert_eq!(reports.len(), Locale::ALL.len());
    for report in reports {
        assert!(report.is_complete());
        assert_eq!(report.translated(), report.total);
        assert!(i18n::missing_keys(report.locale).is_empty());
    }
}
