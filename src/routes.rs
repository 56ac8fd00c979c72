use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware::{from_fn, from_fn_with_state},
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::api::ApiDoc;
use crate::handlers::{protected, public};
use crate::middleware::{error_details_middleware, jwt_auth_middleware, not_found_fallback};
use crate::state::AppState;

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    let mut router = Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .fallback(not_found_fallback)
        .layer(from_fn(error_details_middleware))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security.cors_origins));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

fn public_routes() -> Router<AppState> {
    use public::auth;

    Router::new()
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .route("/v3/api-docs", get(api_docs))
        // Token acquisition and account creation
        .route("/api/register", post(auth::register_post))
        .route("/api/auth/login", post(auth::login_post))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use protected::{auth, employees};

    Router::new()
        .route("/api/auth/whoami", get(auth::whoami_get))
        // Collection
        .route(
            "/api/employees",
            get(employees::employees_get).post(employees::employees_post),
        )
        .route("/api/employees/all", get(employees::employees_all_get))
        // Individual record
        .route(
            "/api/employees/:id",
            get(employees::employee_get)
                .put(employees::employee_put)
                .delete(employees::employee_delete),
        )
        .route_layer(from_fn_with_state(state, jwt_auth_middleware))
}

async fn api_docs() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// `*` anywhere in the list allows every origin
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}
