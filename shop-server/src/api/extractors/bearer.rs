//! Axum extractor for bearer tokens

use crate::ApiError;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Extracts the raw token from an `Authorization: Bearer <token>` header.
///
/// Extraction only peels the scheme off; verification happens in the
/// handler via the state's validator.
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(ApiError::invalid_credentials)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(ApiError::invalid_credentials)?;

        if token.is_empty() {
            return Err(ApiError::invalid_credentials());
        }

        Ok(BearerToken(token.to_string()))
    }
}
