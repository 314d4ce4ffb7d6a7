//! Integration tests for config load/save and backend address resolution.

use sales_qa_client::{config, Config};
use predicates::prelude::*;

#[test]
fn load_existing_yaml_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    std::fs::write(
        &config_path,
        r#"
api:
  base_url: "http://qa.example.com:8000"
ui:
  default_question: "What is the total revenue in Texas?"
"#,
    )
    .unwrap();

    let result = config::load(&config_path);
    let cfg = result.expect("load should succeed");
    assert_eq!(
        cfg.api.base_url.as_deref(),
        Some("http://qa.example.com:8000")
    );
    assert_eq!(
        cfg.ui.default_question.as_deref(),
        Some("What is the total revenue in Texas?")
    );
}

#[test]
fn load_tolerates_missing_sections() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    std::fs::write(&config_path, "api:\n  base_url: \"http://localhost:9000\"\n").unwrap();

    let cfg = config::load(&config_path).expect("load should succeed");
    assert_eq!(cfg.api.base_url.as_deref(), Some("http://localhost:9000"));
    assert_eq!(cfg.ui.default_question, None);
}

#[test]
fn save_creates_directory_and_file_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("sales-qa");
    let config_path = config_dir.join("config.yaml");
    assert!(!config_dir.exists(), "config dir should not exist yet");

    let mut config = Config::default();
    config.api.base_url = Some("http://127.0.0.1:8001".into());
    config.ui.default_question = Some("How many orders shipped in May?".into());

    let result = config::save(&config_path, &config);
    result.expect("save should succeed");
    let pred = predicates::path::exists();
    assert!(
        pred.eval(&config_path),
        "config file should exist after save"
    );
    assert!(config_dir.exists(), "config directory should be created");
}

#[test]
fn round_trip_preserves_schema() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    let yaml = r#"
api:
  base_url: "http://127.0.0.1:8000"
ui:
  default_question: "What is the best selling product?"
"#;
    std::fs::write(&config_path, yaml).unwrap();

    let loaded = config::load(&config_path).expect("load should succeed");
    config::save(&config_path, &loaded).expect("save should succeed");

    let contents = std::fs::read_to_string(&config_path).unwrap();
    let pred = predicates::str::contains("api:");
    assert!(pred.eval(&contents), "saved file should contain api section");
    let pred = predicates::str::contains("base_url");
    assert!(pred.eval(&contents), "saved file should contain base_url");
    let pred = predicates::str::contains("ui:");
    assert!(pred.eval(&contents), "saved file should contain ui section");

    let reloaded = config::load(&config_path).expect("reload should succeed");
    assert_eq!(reloaded.api.base_url, loaded.api.base_url);
    assert_eq!(reloaded.ui.default_question, loaded.ui.default_question);
}

/// Config path resolves to `~/.sales-qa/config.yaml` using the current
/// platform's home dir. We override the HOME env var to a temp dir to verify
/// the resolution.
#[test]
fn default_config_path_uses_home_directory() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path().to_str().unwrap().to_string();

    // Override HOME (Unix) / USERPROFILE (Windows) temporarily.
    let key = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    let original = std::env::var(key).ok();

    std::env::set_var(key, &home);
    let path = config::default_config_path();
    // Restore.
    match original {
        Some(v) => std::env::set_var(key, v),
        None => std::env::remove_var(key),
    }

    let path = path.expect("should resolve a config path");
    let expected = dir.path().join(".sales-qa").join("config.yaml");
    assert_eq!(path, expected);
}

/// Base address precedence: env var, then config file, then loopback default.
/// All three cases run in one test because they share the env var.
#[test]
fn base_url_resolution_precedence() {
    let original = std::env::var(config::BASE_URL_ENV).ok();
    std::env::remove_var(config::BASE_URL_ENV);

    let empty = Config::default();
    assert_eq!(config::resolve_base_url(&empty), config::DEFAULT_BASE_URL);

    let mut with_file = Config::default();
    with_file.api.base_url = Some("http://filehost:8000".into());
    assert_eq!(config::resolve_base_url(&with_file), "http://filehost:8000");

    std::env::set_var(config::BASE_URL_ENV, "http://envhost:8000");
    assert_eq!(config::resolve_base_url(&with_file), "http://envhost:8000");

    // An empty env var does not shadow the config file.
    std::env::set_var(config::BASE_URL_ENV, "");
    assert_eq!(config::resolve_base_url(&with_file), "http://filehost:8000");

    match original {
        Some(v) => std::env::set_var(config::BASE_URL_ENV, v),
        None => std::env::remove_var(config::BASE_URL_ENV),
    }
}
