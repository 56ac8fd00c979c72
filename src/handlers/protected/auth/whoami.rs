use axum::Extension;

use crate::api::dto::WhoAmIResponse;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// GET /api/auth/whoami - Get current authenticated user details
#[utoipa::path(
    get,
    path = "/api/auth/whoami",
    responses(
        (status = 200, description = "Current user", body = WhoAmIResponse),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorDetails)
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn whoami_get(Extension(user): Extension<AuthUser>) -> ApiResult<WhoAmIResponse> {
    Ok(ApiResponse::success(WhoAmIResponse {
        id: user.id,
        email: user.email,
        roles: user.roles,
    }))
}
