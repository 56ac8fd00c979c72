pub mod employee_service;
pub mod user_service;

pub use employee_service::EmployeeService;
pub use user_service::UserService;

use crate::auth::JwtError;
use crate::database::manager::DatabaseError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Token error: {0}")]
    Token(#[from] JwtError),
}
