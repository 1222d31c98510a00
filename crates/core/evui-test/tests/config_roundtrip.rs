use evui_core::config::ConfigManager;
use evui_core::i18n::Locale;
use tempfile::TempDir;

#[test]
fn config_file_drives_formatting() {
    let dir = TempDir::new().unwrap();
    let home = dir.path().join("evui");

    {
        let mut manager = ConfigManager::new(&home).unwrap();
        assert!(manager.path().exists());
        manager.update("locale", "it_IT.UTF-8").unwrap();
        manager.update("fmt_limit", "1000").unwrap();
        manager.update("fmt_digits", "2").unwrap();
        manager.update("currency", "usd").unwrap();
    }

    let content = std::fs::read_to_string(home.join("config.toml")).unwrap();
    assert!(content.contains("locale = \"it\""), "{}", content);

    let manager = ConfigManager::new(&home).unwrap();
    let formatter = manager.config.formatter();
    assert_eq!(formatter.locale(), Locale::It);
    assert_eq!(formatter.fmt(Some(1234.0)), "1.23");
    assert_eq!(formatter.fmt_unit(999.0), "");
    assert_eq!(
        formatter.fmt_price_per_kwh(0.25, &manager.config.currency),
        "25 ct/kWh"
    );
}
