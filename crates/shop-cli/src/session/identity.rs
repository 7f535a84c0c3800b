//! The client-held view of who is logged in.

use crate::client::client::ApiUser;

use shop_auth::Claims;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity decoded from a token payload. Display-only: holding one
/// proves nothing, the raw token does the talking to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
}

impl SessionIdentity {
    /// Build from decoded claims; a non-UUID subject counts as malformed.
    pub fn from_claims(claims: &Claims) -> Option<Self> {
        let id = Uuid::parse_str(&claims.sub).ok()?;
        Some(Self {
            id,
            email: claims.email.clone(),
            name: claims.name.clone(),
            photo: claims.photo.clone(),
        })
    }

    /// Decode a token's payload into an identity.
    ///
    /// Returns `None` for anything malformed; this path never fails
    /// louder than that.
    pub fn from_token(token: &str) -> Option<Self> {
        shop_auth::decode_unverified(token)
            .as_ref()
            .and_then(Self::from_claims)
    }
}

impl From<ApiUser> for SessionIdentity {
    fn from(user: ApiUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: Some(user.name),
            photo: user.photo,
        }
    }
}
