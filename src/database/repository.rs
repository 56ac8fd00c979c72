use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::memory::{MemoryEmployeeRepository, MemoryUserRepository};
use crate::database::models::{Employee, EmployeeField, NewEmployee, NewUser, User};
use crate::database::pagination::{Page, PageRequest};
use crate::database::postgres::{PgEmployeeRepository, PgUserRepository};

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Employee>, DatabaseError>;

    async fn find_page(&self, request: &PageRequest<EmployeeField>) -> Result<Page<Employee>, DatabaseError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DatabaseError>;

    async fn insert(&self, employee: NewEmployee) -> Result<Employee, DatabaseError>;

    /// Overwrite every column; `None` when no row has this id
    async fn update(&self, id: i64, employee: NewEmployee) -> Result<Option<Employee>, DatabaseError>;

    /// `false` when no row has this id
    async fn delete(&self, id: i64) -> Result<bool, DatabaseError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError>;

    /// Insert the user and grant `user.role`, creating the role row on first use
    async fn insert(&self, user: NewUser) -> Result<User, DatabaseError>;
}

#[derive(Clone)]
enum Backend {
    Postgres(PgPool),
    Memory,
}

/// The repositories a running service talks to, plus a way to check they are reachable
#[derive(Clone)]
pub struct Storage {
    pub employees: Arc<dyn EmployeeRepository>,
    pub users: Arc<dyn UserRepository>,
    backend: Backend,
}

impl Storage {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            employees: Arc::new(PgEmployeeRepository::new(pool.clone())),
            users: Arc::new(PgUserRepository::new(pool.clone())),
            backend: Backend::Postgres(pool),
        }
    }

    pub fn memory() -> Self {
        Self {
            employees: Arc::new(MemoryEmployeeRepository::new()),
            users: Arc::new(MemoryUserRepository::new()),
            backend: Backend::Memory,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Postgres(_) => "postgres",
            Backend::Memory => "memory",
        }
    }

    pub async fn ping(&self) -> Result<(), DatabaseError> {
        match &self.backend {
            Backend::Postgres(pool) => DatabaseManager::health_check(pool).await,
            Backend::Memory => Ok(()),
        }
    }
}
