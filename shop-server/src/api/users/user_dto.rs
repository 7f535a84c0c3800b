use shop_core::UserRecord;

use serde::Serialize;

/// User DTO for JSON serialization.
///
/// This is the only user shape that crosses the wire; the password
/// hash stays behind on purpose.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub name: String,
    pub photo: Option<String>,
    pub created_at: i64,
}

impl From<UserRecord> for UserDto {
    fn from(u: UserRecord) -> Self {
        Self {
            id: u.id.to_string(),
            email: u.email,
            name: u.name,
            photo: u.photo,
            created_at: u.created_at.timestamp(),
        }
    }
}
