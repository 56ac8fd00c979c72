use std::sync::Arc;

use crate::api::dto::UserRegistrationRequest;
use crate::auth::password::{hash_password_async, verify_password_async};
use crate::database::models::{NewUser, User, DEFAULT_ROLE};
use crate::database::repository::UserRepository;
use crate::database::DatabaseError;
use crate::services::ServiceError;

/// Registration and credential checks for user accounts
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    pub async fn register(&self, request: UserRegistrationRequest) -> Result<User, ServiceError> {
        tracing::debug!("Attempting to save new user with email: {}", request.email);

        let password_hash = hash_password_async(request.password, self.bcrypt_cost)
            .await
            .map_err(ServiceError::PasswordHash)?;

        let email = request.email;
        let user = NewUser {
            first_name: request.first_name,
            last_name: request.last_name,
            email: email.clone(),
            password_hash,
            role: DEFAULT_ROLE.to_string(),
        };

        let saved = self.users.insert(user).await.map_err(|err| match err {
            DatabaseError::Conflict(_) => {
                tracing::warn!("Registration rejected, email already registered: {}", email);
                ServiceError::Conflict(format!("User with email {} already exists", email))
            }
            other => other.into(),
        })?;

        tracing::info!("User registered successfully: {}", saved.email);
        Ok(saved)
    }

    /// Unknown email and wrong password are indistinguishable to the caller
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, ServiceError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            tracing::warn!("User not found with email: {}", email);
            return Err(ServiceError::InvalidCredentials);
        };

        let matches = verify_password_async(password.to_string(), user.password.clone())
            .await
            .map_err(ServiceError::PasswordHash)?;
        if !matches {
            tracing::warn!("Bad credentials for user: {}", email);
            return Err(ServiceError::InvalidCredentials);
        }

        Ok(user)
    }

    pub async fn load_user_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        tracing::debug!("Attempting to load user by email: {}", email);
        Ok(self.users.find_by_email(email).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryUserRepository;

    fn service() -> UserService {
        UserService::new(Arc::new(MemoryUserRepository::new()), 4)
    }

    fn registration(email: &str, password: &str) -> UserRegistrationRequest {
        UserRegistrationRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn register_hashes_password_and_grants_default_role() {
        let service = service();
        let user = service.register(registration("jane@example.com", "secret1")).await.unwrap();
        assert_ne!(user.password, "secret1");
        assert!(user.password.starts_with("$2"));
        assert_eq!(user.roles, vec![DEFAULT_ROLE.to_string()]);
    }

    #[tokio::test]
    async fn duplicate_registration_conflicts() {
        let service = service();
        service.register(registration("jane@example.com", "secret1")).await.unwrap();
        let err = service.register(registration("jane@example.com", "secret2")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn authenticate_checks_password() {
        let service = service();
        service.register(registration("jane@example.com", "secret1")).await.unwrap();

        let user = service.authenticate("jane@example.com", "secret1").await.unwrap();
        assert_eq!(user.email, "jane@example.com");

        assert!(matches!(
            service.authenticate("jane@example.com", "wrong-pass").await,
            Err(ServiceError::InvalidCredentials)
        ));
        assert!(matches!(
            service.authenticate("nobody@example.com", "secret1").await,
            Err(ServiceError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn load_user_by_email_returns_none_for_unknown() {
        let service = service();
        assert!(service.load_user_by_email("ghost@example.com").await.unwrap().is_none());
    }
}
