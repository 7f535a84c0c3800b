use crate::{AuthError, Claims, Result as AuthErrorResult};

use shop_core::UserRecord;

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Issues signed identity tokens at registration and login time.
///
/// Every token carries an HS256 signature and an expiry claim. The
/// payload is readable by anyone (the client decodes it for display),
/// but only holders of the secret can mint or alter one.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl_secs: i64,
}

impl TokenIssuer {
    /// Create an issuer from a symmetric secret and a token lifetime.
    pub fn with_hs256(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    /// Encode the identity claims for a user record.
    #[track_caller]
    pub fn issue(&self, user: &UserRecord) -> AuthErrorResult<String> {
        let now = chrono::Utc::now().timestamp();

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            name: Some(user.name.clone()),
            photo: user.photo.clone(),
            exp: now + self.ttl_secs,
            iat: now,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
