//! Tests for the matchfeat configuration system.

use std::sync::Mutex;

use matchfeat_core::config::{ConfigOverrides, MatchfeatConfig};
use matchfeat_core::errors::ConfigError;
use matchfeat_core::types::DerivedSuffix;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all MATCHFEAT_ env vars to prevent cross-test contamination.
fn clear_env_vars() {
    for key in [
        "MATCHFEAT_COMPLEMENTARY",
        "MATCHFEAT_POS_THRESHOLD",
        "MATCHFEAT_NULL_VALUE",
        "MATCHFEAT_SENTINEL",
        "MATCHFEAT_PARALLEL",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("matchfeat.toml"),
        r#"
[extraction]
pos_threshold = 0.55
null_value = 0.25
sentinel = "<pad>"
"#,
    )
    .unwrap();

    std::env::set_var("MATCHFEAT_NULL_VALUE", "0.75");

    let overrides = ConfigOverrides {
        sentinel: Some("[NONE]".to_string()),
        ..Default::default()
    };

    let config = MatchfeatConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Project only
    assert_eq!(config.extraction.pos_threshold, Some(0.55));
    // Env over project
    assert_eq!(config.extraction.null_value, Some(0.75));
    // Overrides over project
    assert_eq!(config.extraction.effective_sentinel(), "[NONE]");

    clear_env_vars();
}

#[test]
fn test_load_missing_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let config = MatchfeatConfig::load(dir.path(), None).unwrap();

    assert!(config.extraction.effective_complementary());
    assert!((config.extraction.effective_pos_threshold() - 0.40).abs() < 1e-12);
    assert!((config.extraction.effective_null_value() - 0.5).abs() < 1e-12);
    assert_eq!(config.extraction.effective_sentinel(), "[UNP]");
}

#[test]
fn test_env_bool_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::env::set_var("MATCHFEAT_COMPLEMENTARY", "false");
    std::env::set_var("MATCHFEAT_PARALLEL", "true");

    let config = MatchfeatConfig::load(dir.path(), None).unwrap();
    assert!(!config.extraction.effective_complementary());
    assert!(config.extraction.effective_parallel());

    clear_env_vars();
}

#[test]
fn test_unparseable_env_value_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::env::set_var("MATCHFEAT_POS_THRESHOLD", "not-a-number");

    let config = MatchfeatConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.extraction.pos_threshold, None);

    clear_env_vars();
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("matchfeat.toml"), "this is not valid toml {{{{").unwrap();

    match MatchfeatConfig::load(dir.path(), None).unwrap_err() {
        ConfigError::ParseError { .. } => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_threshold_out_of_range_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let overrides = ConfigOverrides {
        pos_threshold: Some(1.5),
        ..Default::default()
    };

    match MatchfeatConfig::load(dir.path(), Some(&overrides)).unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "extraction.pos_threshold");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_non_finite_null_value_rejected() {
    let result = MatchfeatConfig::from_toml("[extraction]\nnull_value = nan\n");
    assert!(matches!(
        result,
        Err(ConfigError::ValidationFailed { ref field, .. }) if field == "extraction.null_value"
    ));
}

#[test]
fn test_negative_null_value_override_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let overrides = ConfigOverrides {
        null_value: Some(-0.5),
        ..Default::default()
    };

    match MatchfeatConfig::load(dir.path(), Some(&overrides)).unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "extraction.null_value");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_duplicate_suffixes_rejected() {
    let result = MatchfeatConfig::from_toml(
        "[extraction]\nderived_suffixes = [\"both\", \"min\", \"both\"]\n",
    );
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_suffixes_parse_from_toml() {
    let config = MatchfeatConfig::from_toml(
        "[extraction]\nderived_suffixes = [\"exclusive\", \"overall\", \"max\"]\n",
    )
    .unwrap();
    assert_eq!(
        config.extraction.effective_derived_suffixes(),
        vec![DerivedSuffix::Exclusive, DerivedSuffix::Overall, DerivedSuffix::Max]
    );
}

#[test]
fn test_unrecognized_keys_accepted() {
    let result = MatchfeatConfig::from_toml(
        r#"
[extraction]
pos_threshold = 0.5
future_unknown_key = "hello"

[future_section]
another_key = 42
"#,
    );
    assert!(result.is_ok());
}

#[test]
fn test_toml_round_trip() {
    let config = MatchfeatConfig::from_toml(
        "[extraction]\ncomplementary = false\npos_threshold = 0.3\n",
    )
    .unwrap();
    let text = config.to_toml().unwrap();
    let back = MatchfeatConfig::from_toml(&text).unwrap();
    assert_eq!(config, back);
}
