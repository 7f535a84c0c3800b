//! Profile REST API handlers

use crate::{ApiError, ApiResult, UpdateProfileRequest, UpdateProfileResponse};

use crate::state::AppState;

use shop_db::UserRepository;

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// PUT /users/{id}
///
/// Update the display attributes of a profile. A missing target is a
/// 404; writing values identical to the stored ones is still a success.
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<UpdateProfileResponse>> {
    let user_id = Uuid::parse_str(&id)?;

    let repo = UserRepository::new(state.pool.clone());

    // Look the target up first so "missing" and "unchanged" stay
    // distinguishable.
    let existing = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", id)))?;

    let name = req.name.unwrap_or(existing.name);
    let photo = req.photo.or(existing.photo);

    repo.update_profile(user_id, &name, photo.as_deref()).await?;

    let updated = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::internal("User vanished during update"))?;

    Ok(Json(UpdateProfileResponse {
        message: "Profile updated".to_string(),
        user: updated.into(),
    }))
}
