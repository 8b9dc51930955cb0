use super::*;

#[test]
fn test_defaults_are_valid() {
    let cfg = Config::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.cache.max_mappings, 5000);
    assert_eq!(cfg.cache.cleanup_threshold, 4500);
    assert_eq!(cfg.learning.batch_size, 50);
    assert_eq!(cfg.storage.backend, "sqlite");
}

#[test]
fn test_partial_toml_fills_defaults() {
    let toml_str = r#"
        [cache]
        max_mappings = 100
        cleanup_threshold = 80

        [learning]
        batch_size = 10
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.cache.max_mappings, 100);
    assert_eq!(cfg.cache.cleanup_threshold, 80);
    assert_eq!(cfg.cache.recency_window_days, 30);
    assert_eq!(cfg.learning.batch_size, 10);
    assert!(cfg.learning.enabled);
    assert_eq!(cfg.memo.ttl_secs, 300);
    assert_eq!(cfg.storage.key_prefix, "translation");
}

#[test]
fn test_threshold_above_cap_rejected() {
    let mut cfg = Config::default();
    cfg.cache.cleanup_threshold = cfg.cache.max_mappings + 1;
    let err = cfg.validate().unwrap_err().to_string();
    assert!(err.contains("cleanup_threshold"), "got: {err}");
}

#[test]
fn test_zero_batch_rejected() {
    let mut cfg = Config::default();
    cfg.learning.batch_size = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn test_unknown_backend_rejected() {
    let mut cfg = Config::default();
    cfg.storage.backend = "redis".to_string();
    assert!(cfg.validate().is_err());
}

#[test]
fn test_prefix_with_separator_rejected() {
    let mut cfg = Config::default();
    cfg.storage.key_prefix = "a:b".to_string();
    assert!(cfg.validate().is_err());
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let cfg = load("/nonexistent/__scoreline_test__/config.toml").unwrap();
    assert_eq!(cfg.cache.max_mappings, 5000);
}

#[test]
fn test_load_invalid_file_errors() {
    let tmp = std::env::temp_dir().join("__scoreline_test_bad_config__.toml");
    std::fs::write(&tmp, "[cache]\nmax_mappings = 0\n").unwrap();
    let result = load(tmp.to_str().unwrap());
    let _ = std::fs::remove_file(&tmp);
    assert!(result.is_err());
}

#[test]
fn test_shellexpand_home() {
    let expanded = shellexpand("~/data/x.db");
    if std::env::var_os("HOME").is_some() {
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/data/x.db"));
    }
    assert_eq!(shellexpand("/abs/path"), "/abs/path");
}

#[test]
fn test_relative_paths_resolve_under_data_dir() {
    let general = GeneralConfig {
        data_dir: "/var/lib/scoreline".to_string(),
        ..GeneralConfig::default()
    };
    assert_eq!(general.resolve("logs/scoreline.log"), "/var/lib/scoreline/logs/scoreline.log");
    assert_eq!(general.resolve("/tmp/t.db"), "/tmp/t.db");
}

#[test]
fn test_recency_window_out_of_range_rejected() {
    for days in [0, -1, MAX_RECENCY_WINDOW_DAYS + 1, i64::MAX / 1000] {
        let mut cfg = Config::default();
        cfg.cache.recency_window_days = days;
        let err = cfg.validate().unwrap_err().to_string();
        assert!(err.contains("recency_window_days"), "{days}: {err}");
    }
    let mut cfg = Config::default();
    cfg.cache.recency_window_days = MAX_RECENCY_WINDOW_DAYS;
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_zero_threshold_rejected() {
    let mut cfg = Config::default();
    cfg.cache.cleanup_threshold = 0;
    assert!(cfg.validate().is_err());
}
