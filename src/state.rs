use std::sync::Arc;

use crate::auth::{JwtError, JwtService};
use crate::config::AppConfig;
use crate::database::Storage;
use crate::services::{EmployeeService, UserService};

/// Shared application state handed to every handler and middleware
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub storage: Storage,
    pub employees: EmployeeService,
    pub users: UserService,
    pub jwt: Arc<JwtService>,
}

impl AppState {
    pub fn new(config: AppConfig, storage: Storage) -> Result<Self, JwtError> {
        let jwt = JwtService::from_config(&config.security, config.environment)?;

        Ok(Self {
            employees: EmployeeService::new(storage.employees.clone()),
            users: UserService::new(storage.users.clone(), config.security.bcrypt_cost),
            jwt: Arc::new(jwt),
            storage,
            config: Arc::new(config),
        })
    }
}
