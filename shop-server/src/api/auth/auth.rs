//! Authentication REST API handlers
//!
//! Registration and login both end by issuing a signed token; `/me`
//! is the verified read-back for a bearer of such a token.

use crate::{
    ApiError, ApiResult, BearerToken, LoginRequest, LoginResponse, MeResponse, RegisterRequest,
    RegisterResponse,
};

use crate::state::AppState;

use shop_core::UserRecord;
use shop_db::UserRepository;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use uuid::Uuid;

/// POST /register
///
/// Create an account. The store's unique email constraint is the only
/// duplicate check, so concurrent registrations cannot both succeed.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    req.validate()?;

    let password_hash = shop_auth::hash_password(&req.password)?;
    let record = UserRecord::new(
        req.name.trim().to_string(),
        req.email.trim().to_string(),
        password_hash,
        req.photo_opt(),
    );

    let repo = UserRepository::new(state.pool.clone());
    repo.create(&record).await?;

    let token = state.issuer.issue(&record)?;

    log::info!("Registered user {} ({})", record.id, record.email);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered".to_string(),
            user_id: record.id.to_string(),
            token,
        }),
    ))
}

/// POST /login
///
/// Verify credentials and issue a token. Unknown email and wrong
/// password produce the same response; the unknown-email path burns a
/// hash so the two cannot be told apart by timing either.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let repo = UserRepository::new(state.pool.clone());

    let user = match repo.find_by_email(req.email.trim()).await? {
        Some(user) => user,
        None => {
            shop_auth::dummy_verify(&req.password);
            return Err(ApiError::invalid_credentials());
        }
    };

    if !shop_auth::verify_password(&req.password, &user.password_hash)? {
        return Err(ApiError::invalid_credentials());
    }

    let token = state.issuer.issue(&user)?;

    log::info!("Login for user {} ({})", user.id, user.email);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: user.into(),
        token,
    }))
}

/// GET /me
///
/// Return the account behind a bearer token. This is the only place a
/// token is accepted as proof of identity, and it is always verified.
pub async fn me(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> ApiResult<Json<MeResponse>> {
    let claims = state.validator.validate(&bearer.0)?;

    // A verified token whose subject is garbage or gone is still not
    // a valid credential.
    let user_id =
        Uuid::parse_str(&claims.sub).map_err(|_| ApiError::invalid_credentials())?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(ApiError::invalid_credentials)?;

    Ok(Json(MeResponse { user: user.into() }))
}
