use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    /// New display name; omit to keep the current one
    #[serde(default)]
    pub name: Option<String>,

    /// New avatar URL; omit to keep the current one
    #[serde(default)]
    pub photo: Option<String>,
}
