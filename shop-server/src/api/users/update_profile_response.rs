use crate::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub user: UserDto,
}
