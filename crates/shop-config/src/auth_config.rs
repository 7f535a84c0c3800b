use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_SECS, MIN_JWT_SECRET_BYTES};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. When unset the server generates an
    /// ephemeral one at startup and issued tokens die with the process.
    pub jwt_secret: Option<String>,
    /// Token lifetime in seconds
    pub token_ttl_secs: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.token_ttl_secs <= 0 {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_secs must be positive, got {}",
                self.token_ttl_secs
            )));
        }

        if let Some(ref secret) = self.jwt_secret
            && secret.len() < MIN_JWT_SECRET_BYTES
        {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} bytes",
                MIN_JWT_SECRET_BYTES
            )));
        }

        Ok(())
    }
}
