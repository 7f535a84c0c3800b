use crate::{ApiError, ApiResult};

use serde::Deserialize;

/// All fields default so absent ones reach the handler as empty and
/// fail validation with a 400, not an extractor rejection.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Optional avatar URL; the storefront sends "" when unset
    pub photo: String,
}

impl Default for RegisterRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            photo: String::new(),
        }
    }
}

impl RegisterRequest {
    /// Check the required fields; `photo` is the only optional one.
    pub fn validate(&self) -> ApiResult<()> {
        for (value, field) in [
            (&self.name, "name"),
            (&self.email, "email"),
            (&self.password, "password"),
        ] {
            if value.trim().is_empty() {
                return Err(ApiError::validation("Missing required fields", Some(field)));
            }
        }
        Ok(())
    }

    /// Normalized photo: empty string means none.
    pub fn photo_opt(&self) -> Option<String> {
        if self.photo.trim().is_empty() {
            None
        } else {
            Some(self.photo.clone())
        }
    }
}
