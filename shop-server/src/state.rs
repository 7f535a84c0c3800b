use shop_auth::{TokenIssuer, TokenValidator};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state.
///
/// Built once during startup, after the pool and token secret are
/// ready, and injected into the router before any route is wired; no
/// handler can observe a half-initialized handle.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub issuer: Arc<TokenIssuer>,
    pub validator: Arc<TokenValidator>,
}

impl AppState {
    pub fn new(pool: SqlitePool, secret: &[u8], token_ttl_secs: i64) -> Self {
        Self {
            pool,
            issuer: Arc::new(TokenIssuer::with_hs256(secret, token_ttl_secs)),
            validator: Arc::new(TokenValidator::with_hs256(secret)),
        }
    }
}
