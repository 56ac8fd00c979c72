//! In-memory repositories for tests and for running without Postgres.
//! Enforce the same unique-email constraints as the SQL schema.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::database::manager::DatabaseError;
use crate::database::models::{Employee, EmployeeField, NewEmployee, NewUser, User};
use crate::database::pagination::{Page, PageRequest};
use crate::database::repository::{EmployeeRepository, UserRepository};

struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

pub struct MemoryEmployeeRepository {
    table: RwLock<Table<Employee>>,
}

impl MemoryEmployeeRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for MemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn email_taken(table: &Table<Employee>, email: &str, except: Option<i64>) -> bool {
    table
        .rows
        .values()
        .any(|e| e.email == email && Some(e.id) != except)
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, DatabaseError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_page(&self, request: &PageRequest<EmployeeField>) -> Result<Page<Employee>, DatabaseError> {
        let table = self.table.read().await;
        let mut rows: Vec<Employee> = table.rows.values().cloned().collect();
        rows.sort_by(|a, b| request.compare(a, b, |x, y| x.id.cmp(&y.id)));

        let total = rows.len() as i64;
        let content = rows
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.limit() as usize)
            .collect();
        Ok(Page::new(content, request, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DatabaseError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, employee: NewEmployee) -> Result<Employee, DatabaseError> {
        let mut table = self.table.write().await;
        if email_taken(&table, &employee.email, None) {
            return Err(DatabaseError::Conflict("employees_email_key".to_string()));
        }
        let id = table.allocate_id();
        let row = employee.into_employee(id);
        table.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, employee: NewEmployee) -> Result<Option<Employee>, DatabaseError> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&id) {
            return Ok(None);
        }
        if email_taken(&table, &employee.email, Some(id)) {
            return Err(DatabaseError::Conflict("employees_email_key".to_string()));
        }
        let row = employee.into_employee(id);
        table.rows.insert(id, row.clone());
        Ok(Some(row))
    }

    async fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}

pub struct MemoryUserRepository {
    table: RwLock<Table<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, DatabaseError> {
        let mut table = self.table.write().await;
        if table.rows.values().any(|u| u.email == user.email) {
            return Err(DatabaseError::Conflict("users_email_key".to_string()));
        }
        let id = table.allocate_id();
        let row = User {
            id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            password: user.password_hash,
            roles: vec![user.role],
        };
        table.rows.insert(id, row.clone());
        Ok(row)
    }
}
