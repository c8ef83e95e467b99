use std::collections::HashMap;
use std::path::PathBuf;

use attendance_calculator::config::{AppConfig, ConfigError, DEFAULT_HOST, DEFAULT_PORT};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.bind_addr(), (DEFAULT_HOST, DEFAULT_PORT));
    assert_eq!(config.catalog_path, None);
}

#[test]
fn test_overrides() {
    let config = AppConfig::from_lookup(lookup(&[
        ("ATTENDANCE_HOST", "0.0.0.0"),
        ("ATTENDANCE_PORT", " 9000 "),
        ("ATTENDANCE_CATALOG", "data/subjects.csv"),
    ]))
    .unwrap();

    assert_eq!(config.bind_addr(), ("0.0.0.0", 9000));
    assert_eq!(config.catalog_path, Some(PathBuf::from("data/subjects.csv")));
}

#[test]
fn test_invalid_port() {
    let err = AppConfig::from_lookup(lookup(&[("ATTENDANCE_PORT", "eighty")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidPort {
            var: "ATTENDANCE_PORT",
            value: "eighty".to_string(),
        }
    );
}

#[test]
fn test_empty_values() {
    assert_eq!(
        AppConfig::from_lookup(lookup(&[("ATTENDANCE_HOST", " ")])).unwrap_err(),
        ConfigError::Empty("ATTENDANCE_HOST")
    );
    assert_eq!(
        AppConfig::from_lookup(lookup(&[("ATTENDANCE_CATALOG", "")])).unwrap_err(),
        ConfigError::Empty("ATTENDANCE_CATALOG")
    );
}
