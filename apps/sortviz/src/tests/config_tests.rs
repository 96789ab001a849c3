use super::*;

use std::{
    collections::HashMap,
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_follow_domain_constants() {
    let settings = Settings::default();
    assert_eq!(settings.step_interval_ms, 300);
    assert_eq!(settings.column_height, 10);
    assert_eq!(settings.seed, None);
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    settings
        .apply_file("step_interval_ms = 50\ncolumn_height = 4\nseed = 9\n")
        .expect("valid toml");
    assert_eq!(settings.step_interval_ms, 50);
    assert_eq!(settings.column_height, 4);
    assert_eq!(settings.seed, Some(9));
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn malformed_file_is_an_error() {
    let mut settings = Settings::default();
    assert!(settings.apply_file("step_interval_ms = \"fast\"").is_err());
}

#[test]
fn app_prefixed_env_wins_over_plain_env() {
    let mut settings = Settings::default();
    settings.apply_env(lookup(&[
        ("SORTVIZ_STEP_INTERVAL_MS", "120"),
        ("APP__STEP_INTERVAL_MS", "80"),
        ("APP__SEED", "not-a-number"),
        ("RUST_LOG", "debug"),
        ("APP__LOG_FILTER", "sort_core=trace"),
    ]));
    assert_eq!(settings.step_interval_ms, 80);
    assert_eq!(settings.seed, None);
    assert_eq!(settings.log_filter, "sort_core=trace");
}

#[test]
fn zero_values_are_clamped() {
    let mut settings = Settings::default();
    settings.apply_env(lookup(&[
        ("APP__STEP_INTERVAL_MS", "0"),
        ("APP__COLUMN_HEIGHT", "0"),
    ]));
    let settings = settings.normalized();
    assert_eq!(settings.step_interval_ms, 1);
    assert_eq!(settings.column_height, 1);
}

#[test]
fn explicit_config_path_is_loaded() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("sortviz_config_test_{suffix}.toml"));
    fs::write(&path, "column_height = 3\n").expect("write config");

    let settings = load_settings(Some(&path)).expect("load");
    assert_eq!(settings.column_height, 3);

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn missing_explicit_config_path_fails() {
    let path = env::temp_dir().join("sortviz_definitely_missing_config.toml");
    assert!(load_settings(Some(&path)).is_err());
}
