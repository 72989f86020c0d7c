//! Tests for config loading and validation.

use greeter_common::config::MAX_COUNT_LINES;
use greeter_common::hostname::HostnameFailure;
use greeter_common::{GreeterConfig, GreeterError, Person};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_defaults_match_stock_sequence() {
    let config = GreeterConfig::default();
    assert_eq!(config.message, "Hello, world!");
    assert_eq!((config.count_from, config.count_to), (1, 10));
    assert_eq!(config.sine_input, 0.34891);
    assert_eq!(config.person, Person::new("Ilya", 21));
    assert_eq!(config.hostname.failure, HostnameFailure::Error);
    assert!(config.hostname.fixed.is_none());
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(GreeterConfig::from_toml("").unwrap(), GreeterConfig::default());
}

#[test]
fn test_partial_toml() {
    let config = GreeterConfig::from_toml(
        r#"
count_to = 3

[person]
name = "Ada"

[hostname]
failure = "report-empty"
"#,
    )
    .unwrap();
    assert_eq!(config.count_to, 3);
    assert_eq!(config.person, Person::new("Ada", 21));
    assert_eq!(config.hostname.failure, HostnameFailure::ReportEmpty);
    assert_eq!(config.message, "Hello, world!");
}

#[test]
fn test_inverted_range_rejected() {
    let err = GreeterConfig::from_toml("count_from = 5\ncount_to = 2\n").unwrap_err();
    assert!(matches!(err, GreeterError::Config(_)));
}

#[test]
fn test_single_value_range_allowed() {
    let config = GreeterConfig::from_toml("count_from = 7\ncount_to = 7\n").unwrap();
    assert_eq!(config.count_from, config.count_to);
}

#[test]
fn test_non_finite_sine_rejected() {
    let err = GreeterConfig::from_toml("sine_input = nan\n").unwrap_err();
    assert!(err.is_config_failure());
}

#[test]
fn test_malformed_toml() {
    let err = GreeterConfig::from_toml("count_to = \"ten\"").unwrap_err();
    assert!(matches!(err, GreeterError::Toml(_)));
}

#[test]
fn test_unknown_failure_policy() {
    assert!(GreeterConfig::from_toml("[hostname]\nfailure = \"ignore\"\n").is_err());
}

#[test]
fn test_load_explicit_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "message = \"Hi there\"").unwrap();
    let config = GreeterConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.message, "Hi there");
}

#[test]
fn test_load_missing_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = GreeterConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(matches!(err, GreeterError::Config(_)));
}

#[test]
fn test_round_trip_through_toml() {
    let mut config = GreeterConfig::default();
    config.hostname.fixed = Some("lab".into());
    let text = toml::to_string(&config).unwrap();
    assert_eq!(GreeterConfig::from_toml(&text).unwrap(), config);
}

#[test]
fn test_huge_range_rejected() {
    let err = GreeterConfig::from_toml("count_to = 9223372036854775807\n").unwrap_err();
    assert!(matches!(err, GreeterError::Config(_)));

    let err = GreeterConfig::from_toml(
        "count_from = -9223372036854775808\ncount_to = 9223372036854775807\n",
    )
    .unwrap_err();
    assert!(err.is_config_failure());
}

#[test]
fn test_range_at_limit_allowed() {
    let text = format!("count_from = 1\ncount_to = {}\n", MAX_COUNT_LINES);
    assert!(GreeterConfig::from_toml(&text).is_ok());

    let text = format!("count_from = 0\ncount_to = {}\n", MAX_COUNT_LINES);
    assert!(GreeterConfig::from_toml(&text).is_err());
}
