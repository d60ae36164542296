//! Configuration loading

use std::path::PathBuf;
use tempfile::TempDir;
use userapi_infrastructure::ConfigLoader;
use userapi_infrastructure::constants::{DEFAULT_HTTP_PORT, JWT_DEFAULT_EXPIRATION_SECS};

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .unwrap();

    assert_eq!(config.server.port, DEFAULT_HTTP_PORT);
    assert_eq!(config.auth.jwt.expiration_secs, JWT_DEFAULT_EXPIRATION_SECS);
    assert_eq!(config.storage.data_file, PathBuf::from("users.json"));
    assert!(config.auth.jwt.secret.is_none());
}

#[test]
fn test_toml_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("userapi.toml");
    std::fs::write(
        &path,
        r#"
[server]
port = 9090

[auth.jwt]
secret = "a-configured-secret-of-sufficient-length"
expiration_secs = 120

[storage]
data_file = "/var/lib/userapi/users.json"
"#,
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .unwrap();

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.auth.jwt.expiration_secs, 120);
    assert!(config.auth.jwt.has_adequate_secret());
    assert_eq!(
        config.storage.data_file,
        PathBuf::from("/var/lib/userapi/users.json")
    );
}

#[test]
fn test_required_secret_missing_fails_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("userapi.toml");
    std::fs::write(&path, "[auth.jwt]\nrequire_secret = true\n").unwrap();

    let result = ConfigLoader::new()
        .with_config_path(&path)
        .load();

    assert!(result.is_err());
}

#[test]
fn test_saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let loader = ConfigLoader::new();

    let mut config = loader.load().unwrap();
    config.server.port = 7070;
    loader.save_to_file(&config, &path).unwrap();

    let reloaded = loader.with_config_path(&path).load().unwrap();
    assert_eq!(reloaded.server.port, 7070);
}
