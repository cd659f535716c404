use budget_tracker::{
    config::{Config, ConfigManager},
    currency::{CurrencySettings, NegativeStyle},
};
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path()).unwrap();

    let config = manager.load().unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.currency.code, "GBP");
    assert!(!manager.path().exists());
}

#[test]
fn saved_config_is_reloaded() {
    let temp = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path().join("nested")).unwrap();

    let config = Config {
        locale: "de-DE".into(),
        currency: CurrencySettings {
            code: "EUR".into(),
            decimal_separator: ',',
            grouping_separator: '.',
            negative_style: NegativeStyle::Parentheses,
        },
        high_contrast_mode: true,
        screen_reader_mode: false,
    };
    manager.save(&config).unwrap();

    let reloaded = ConfigManager::with_base_dir(temp.path().join("nested"))
        .unwrap()
        .load()
        .unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn partial_file_fills_in_defaults() {
    let temp = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path()).unwrap();
    std::fs::write(manager.path(), r#"{ "locale": "en-US" }"#).unwrap();

    let config = manager.load().unwrap();
    assert_eq!(config.locale, "en-US");
    assert_eq!(config.currency, CurrencySettings::default());
    assert!(!config.screen_reader_mode);
}

#[test]
fn malformed_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path()).unwrap();
    std::fs::write(manager.path(), "{ not json").unwrap();

    assert!(manager.load().is_err());
}
