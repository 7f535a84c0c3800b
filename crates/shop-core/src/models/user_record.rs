//! User entity - the durable credential record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user as stored by the credential store.
///
/// `password_hash` is the bcrypt string for the user's password; the
/// plaintext is never stored. `email` is the unique lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    /// Optional avatar URL
    pub photo: Option<String>,
    /// Set once at creation, immutable afterwards
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Create a new record with a fresh id and creation timestamp.
    pub fn new(name: String, email: String, password_hash: String, photo: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            photo,
            created_at: Utc::now(),
        }
    }

    /// Check if the record has a display photo
    pub fn has_photo(&self) -> bool {
        self.photo.as_deref().is_some_and(|p| !p.is_empty())
    }
}
