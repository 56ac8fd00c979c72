use axum::extract::State;

use crate::api::dto::{JwtResponse, LoginRequest};
use crate::middleware::{ApiResponse, ApiResult, ValidatedJson};
use crate::services::ServiceError;
use crate::state::AppState;

/// POST /api/auth/login - Authenticate user and receive JWT token
///
/// Unknown email and wrong password produce the same 401 so callers
/// cannot discover which accounts are registered.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = JwtResponse),
        (status = 400, description = "Invalid request body", body = crate::error::ErrorDetails),
        (status = 401, description = "Invalid email or password", body = crate::error::ErrorDetails)
    ),
    tag = "auth"
)]
pub async fn login_post(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<JwtResponse> {
    tracing::info!("Login attempt for user: {}", request.email);

    let user = state.users.authenticate(&request.email, &request.password).await?;
    let token = state
        .jwt
        .generate_token(&user.email, &user.roles)
        .map_err(ServiceError::from)?;

    tracing::info!("User {} authenticated successfully", user.email);
    Ok(ApiResponse::success(JwtResponse::bearer(token)))
}
