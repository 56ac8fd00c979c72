// Protected handlers. Every route here sits behind `jwt_auth_middleware`,
// so `AuthUser` is always present in the request extensions.
pub mod auth;
pub mod employees;
