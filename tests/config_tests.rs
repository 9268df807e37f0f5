use sales_report::{
    config::{Config, ConfigError, ConfigManager},
    domain::RollupKey,
};
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("absent.json"));
    let config = manager.load().expect("defaults");
    assert_eq!(config, Config::default());
    assert_eq!(config.counterpart_top_n, 5);
    assert_eq!(config.global_top_n, 10);
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("nested")).expect("create dir");

    let mut config = Config::default();
    config.currency = "VND".to_string();
    config.global_top_n = 3;
    config
        .rollup_keys
        .provinces
        .push(RollupKey::exact("Lam Dong"));

    manager.save(&config).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, config);
    assert!(!manager.config_path().with_extension("json.tmp").exists());
}

#[test]
fn invalid_config_is_not_saved() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let config = Config {
        counterpart_top_n: 0,
        ..Config::default()
    };

    let err = manager.save(&config).expect_err("zero top-n");
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(!manager.config_path().exists());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").expect("write");

    let err = ConfigManager::new(path).load().expect_err("bad json");
    assert!(matches!(err, ConfigError::Serde(_)));
}
