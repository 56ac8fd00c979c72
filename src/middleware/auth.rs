use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user context, reloaded from storage on every request
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub roles: Vec<String>,
}

/// JWT authentication middleware that validates tokens and extracts user context
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_jwt_from_headers(request.headers()).map_err(|msg| {
        tracing::debug!("Rejected {}: {}", request.uri().path(), msg);
        ApiError::unauthorized(msg)
    })?;

    let email = state
        .jwt
        .subject(token)
        .map_err(|e| ApiError::unauthorized(e.to_string()))?;

    // Tokens outlive accounts, so the user must still exist
    let user = state
        .users
        .load_user_by_email(&email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token presented for unknown user: {}", email);
            ApiError::unauthorized("User not found")
        })?;

    request.extensions_mut().insert(AuthUser {
        id: user.id,
        email: user.email,
        roles: user.roles,
    });

    Ok(next.run(request).await)
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<&str, &'static str> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or("Missing Authorization header")?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format")?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        Some(_) => Err("Empty JWT token"),
        None => Err("Authorization header must use Bearer token format"),
    }
}
