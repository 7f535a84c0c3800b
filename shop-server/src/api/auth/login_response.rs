use crate::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserDto,
    pub token: String,
}
