use crate::Config;

use serial_test::serial;

/// Clear every SHOP_* variable these tests touch.
fn clear_env() {
    for var in [
        "SHOP_CONFIG_DIR",
        "SHOP_SERVER_HOST",
        "SHOP_SERVER_PORT",
        "SHOP_DATABASE_PATH",
        "SHOP_AUTH_JWT_SECRET",
        "SHOP_AUTH_TOKEN_TTL_SECS",
        "SHOP_LOG_LEVEL",
        "SHOP_LOG_COLORED",
        "SHOP_LOG_FILE",
    ] {
        unsafe { std::env::remove_var(var) };
    }
}

#[test]
#[serial]
fn defaults_are_sane() {
    clear_env();
    let config = Config::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.database.path, "shop.db");
    assert!(config.auth.jwt_secret.is_none());
    assert_eq!(config.auth.token_ttl_secs, 30 * 24 * 3600);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn env_overrides_beat_defaults() {
    clear_env();
    let tmp = tempfile::tempdir().unwrap();
    unsafe {
        std::env::set_var("SHOP_CONFIG_DIR", tmp.path());
        std::env::set_var("SHOP_SERVER_PORT", "8080");
        std::env::set_var("SHOP_DATABASE_PATH", "other.db");
        std::env::set_var("SHOP_AUTH_TOKEN_TTL_SECS", "60");
    }

    let config = Config::load().unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.database.path, "other.db");
    assert_eq!(config.auth.token_ttl_secs, 60);

    clear_env();
}

#[test]
#[serial]
fn toml_file_is_loaded_from_config_dir() {
    clear_env();
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("config.toml"),
        r#"
[server]
port = 9000

[auth]
token_ttl_secs = 120
"#,
    )
    .unwrap();
    unsafe { std::env::set_var("SHOP_CONFIG_DIR", tmp.path()) };

    let config = Config::load().unwrap();

    assert_eq!(config.server.port, 9000);
    assert_eq!(config.auth.token_ttl_secs, 120);
    // Untouched sections keep their defaults
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.database.path, "shop.db");

    clear_env();
}

#[test]
#[serial]
fn database_path_is_rooted_in_config_dir() {
    clear_env();
    let tmp = tempfile::tempdir().unwrap();
    unsafe { std::env::set_var("SHOP_CONFIG_DIR", tmp.path()) };

    let config = Config::load().unwrap();
    let db_path = config.database_path().unwrap();

    assert!(db_path.starts_with(tmp.path()));
    assert!(db_path.ends_with("shop.db"));

    clear_env();
}
