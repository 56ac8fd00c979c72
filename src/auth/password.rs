// bcrypt is CPU-bound, so the async wrappers hop onto the blocking pool.

use bcrypt::{hash, verify, BcryptError};

pub fn hash_password(password: &str, cost: u32) -> Result<String, BcryptError> {
    hash(password, cost)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, BcryptError> {
    verify(password, hash)
}

pub async fn hash_password_async(password: String, cost: u32) -> Result<String, String> {
    tokio::task::spawn_blocking(move || hash_password(&password, cost))
        .await
        .map_err(|e| format!("password hashing task failed: {}", e))?
        .map_err(|e| format!("Failed to hash password: {}", e))
}

pub async fn verify_password_async(password: String, hash: String) -> Result<bool, String> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| format!("password verification task failed: {}", e))?
        .map_err(|e| format!("Failed to verify password: {}", e))
}
