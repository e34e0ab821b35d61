//! Tests for solver configuration.

use super::*;
use std::io::Write;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        enable_pruning = false
        log_progress = true

        [thread_count]
        specific = 3
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.thread_count, ThreadCount::Specific(3));
    assert!(!config.enable_pruning);
    assert!(config.log_progress);
}

#[test]
fn test_toml_unit_thread_count() {
    let config = SolverConfig::from_toml_str(r#"thread_count = "unlimited""#).unwrap();
    assert_eq!(config.thread_count, ThreadCount::Unlimited);
    assert!(config.enable_pruning);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config, SolverConfig::default());
    assert_eq!(config.thread_count, ThreadCount::Auto);
    assert!(config.enable_pruning);
    assert!(!config.log_progress);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        thread_count: unlimited
        enable_pruning: false
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.thread_count, ThreadCount::Unlimited);
    assert!(!config.enable_pruning);
}

#[test]
fn test_zero_threads_rejected() {
    let err = SolverConfig::from_toml_str("[thread_count]\nspecific = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_invalid_toml() {
    let err = SolverConfig::from_toml_str("enable_pruning = 7").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_load_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"log_progress = true\n").unwrap();

    let config = SolverConfig::load(file.path()).unwrap();
    assert!(config.log_progress);
}

#[test]
fn test_load_missing_file_falls_back() {
    let result = SolverConfig::load("/nonexistent/srflp/solver.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
    assert_eq!(result.unwrap_or_default(), SolverConfig::default());
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_thread_count(ThreadCount::Specific(2))
        .with_pruning(false)
        .with_log_progress(true);

    assert_eq!(config.thread_count, ThreadCount::Specific(2));
    assert!(!config.enable_pruning);
    assert!(config.log_progress);
}

#[test]
fn test_thread_count_resolve() {
    assert_eq!(ThreadCount::Specific(4).resolve(10), 4);
    assert_eq!(ThreadCount::Specific(4).resolve(2), 2);
    assert_eq!(ThreadCount::Specific(4).resolve(0), 1);
    assert!(ThreadCount::Auto.resolve(3) <= 3);
    assert!(ThreadCount::Auto.resolve(3) >= 1);
    assert!(ThreadCount::Unlimited.resolve(1) >= 1);
}

#[test]
fn test_thread_count_display() {
    assert_eq!(ThreadCount::Auto.to_string(), "Auto");
    assert_eq!(ThreadCount::Unlimited.to_string(), "Unlimited");
    assert_eq!(ThreadCount::Specific(8).to_string(), "8");
}
