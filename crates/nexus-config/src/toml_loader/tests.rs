//! Tests for TOML config loading, creation, and path resolution.

use std::path::Path;

use nexus_common::ConfigError;

use super::*;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_nexus_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[backend]
endpoint = "http://localhost:8080/ask"

[chat]
model_label = "llama-3.3-70b-versatile"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.backend.endpoint, "http://localhost:8080/ask");
    assert_eq!(config.chat.model_label, "llama-3.3-70b-versatile");
    // Defaults preserved
    assert_eq!(config.backend.connect_timeout_secs, 10);
    assert_eq!(config.backend.request_timeout_secs, 120);
    assert!(config.chat.greeting.starts_with("Hello!"));
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[backend]
connect_timeout_secs = 0
"#,
    )
    .unwrap();

    // Warns but returns the parsed config with invalid values
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.backend.connect_timeout_secs, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nexus").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(
        config.backend.endpoint,
        "https://arsalan-ai-backend.onrender.com/ask"
    );
    assert_eq!(config.chat.model_label, "OpenRouter/auto");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;

    use crate::schema::NexusConfig;

    let content = default_config_toml();
    let config: NexusConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.backend.connect_timeout_secs, 10);
    assert!(config.chat.greeting.starts_with("Hello!"));
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("nexus"));
        assert!(path_str.ends_with("config.toml"));
    }
}
