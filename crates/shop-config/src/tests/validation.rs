use crate::Config;

#[test]
fn low_port_is_rejected() {
    let mut config = Config::default();
    config.server.port = 80;
    assert!(config.validate().is_err());
}

#[test]
fn port_zero_means_auto_assign() {
    let mut config = Config::default();
    config.server.port = 0;
    assert!(config.validate().is_ok());
}

#[test]
fn short_jwt_secret_is_rejected() {
    let mut config = Config::default();
    config.auth.jwt_secret = Some("too-short".into());
    assert!(config.validate().is_err());

    config.auth.jwt_secret = Some("a".repeat(32));
    assert!(config.validate().is_ok());
}

#[test]
fn non_positive_token_ttl_is_rejected() {
    let mut config = Config::default();
    config.auth.token_ttl_secs = 0;
    assert!(config.validate().is_err());

    config.auth.token_ttl_secs = -5;
    assert!(config.validate().is_err());
}

#[test]
fn escaping_database_path_is_rejected() {
    let mut config = Config::default();

    config.database.path = "../outside.db".into();
    assert!(config.validate().is_err());

    config.database.path = "/absolute/path.db".into();
    assert!(config.validate().is_err());
}
