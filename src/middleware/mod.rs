pub mod auth;
pub mod json;
pub mod response;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use json::ValidatedJson;
pub use response::{error_details_middleware, not_found_fallback, ApiResponse, ApiResult};
