use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub database: String,
    pub backend: String,
}

/// GET / - Service name, version and endpoint overview
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": "Employee Management API",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment,
        "endpoints": {
            "register": "/api/register (public)",
            "login": "/api/auth/login (public)",
            "whoami": "/api/auth/whoami (protected)",
            "employees": "/api/employees[/all|/:id] (protected)",
            "health": "/health (public)",
            "docs": "/v3/api-docs (public)",
        }
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus),
        (status = 503, description = "Database unreachable", body = HealthStatus)
    ),
    tag = "system"
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let (status_code, database) = match state.storage.ping().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let body = HealthStatus {
        status: if status_code == StatusCode::OK { "ok" } else { "degraded" }.to_string(),
        timestamp: Utc::now(),
        database: database.to_string(),
        backend: state.storage.backend_name().to_string(),
    };

    (status_code, Json(body))
}
