use axum::{extract::State, http::StatusCode};

use crate::api::dto::UserRegistrationRequest;
use crate::error::ApiError;
use crate::middleware::ValidatedJson;
use crate::state::AppState;

pub const REGISTERED_MESSAGE: &str = "User registered successfully!";

/// POST /api/register - Create a new user account with the default role
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = UserRegistrationRequest,
    responses(
        (status = 201, description = "User created", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid request body", body = crate::error::ErrorDetails),
        (status = 409, description = "Email already registered", body = crate::error::ErrorDetails)
    ),
    tag = "auth"
)]
pub async fn register_post(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UserRegistrationRequest>,
) -> Result<(StatusCode, &'static str), ApiError> {
    state.users.register(request).await?;
    Ok((StatusCode::CREATED, REGISTERED_MESSAGE))
}
