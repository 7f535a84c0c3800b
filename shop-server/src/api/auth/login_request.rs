use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Default for LoginRequest {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
        }
    }
}
