use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role granted to every self-registered account
pub const DEFAULT_ROLE: &str = "ROLE_USER";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// bcrypt hash
    #[serde(skip_serializing)]
    pub password: String,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
