use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Employee, EmployeeField, NewEmployee, NewUser, User};
use crate::database::pagination::{Page, PageRequest};
use crate::database::repository::{EmployeeRepository, UserRepository};

const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, email";

pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, DatabaseError> {
        let sql = format!("SELECT {} FROM employees ORDER BY id", EMPLOYEE_COLUMNS);
        let rows = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_page(&self, request: &PageRequest<EmployeeField>) -> Result<Page<Employee>, DatabaseError> {
        // Count and rows come from one snapshot so totals match the page content
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&mut *tx)
            .await?;

        // ORDER BY is assembled from whitelisted column names only
        let sql = format!(
            "SELECT {} FROM employees ORDER BY {} LIMIT $1 OFFSET $2",
            EMPLOYEE_COLUMNS,
            request.order_by_sql()
        );
        let rows = sqlx::query_as::<_, Employee>(&sql)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Page::new(rows, request, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DatabaseError> {
        let sql = format!("SELECT {} FROM employees WHERE id = $1", EMPLOYEE_COLUMNS);
        let row = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, employee: NewEmployee) -> Result<Employee, DatabaseError> {
        let sql = format!(
            "INSERT INTO employees (first_name, last_name, email) VALUES ($1, $2, $3) RETURNING {}",
            EMPLOYEE_COLUMNS
        );
        sqlx::query_as::<_, Employee>(&sql)
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.email)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::from_write)
    }

    async fn update(&self, id: i64, employee: NewEmployee) -> Result<Option<Employee>, DatabaseError> {
        let sql = format!(
            "UPDATE employees SET first_name = $2, last_name = $3, email = $4 WHERE id = $1 RETURNING {}",
            EMPLOYEE_COLUMNS
        );
        sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.email)
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::from_write)
    }

    async fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.first_name, u.last_name, u.email, u.password,
                   COALESCE(array_agg(r.name ORDER BY r.name) FILTER (WHERE r.name IS NOT NULL), '{}'::text[]) AS roles
            FROM users u
            LEFT JOIN users_roles ur ON ur.user_id = u.id
            LEFT JOIN roles r ON r.id = ur.role_id
            WHERE u.email = $1
            GROUP BY u.id
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(&self, user: NewUser) -> Result<User, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (first_name, last_name, email, password) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(DatabaseError::from_write)?;

        // No-op update so RETURNING yields the id of an existing role too
        let role_id: i64 = sqlx::query_scalar(
            "INSERT INTO roles (name) VALUES ($1) ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name RETURNING id",
        )
        .bind(&user.role)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO users_roles (user_id, role_id) VALUES ($1, $2)")
            .bind(id)
            .bind(role_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(User {
            id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            password: user.password_hash,
            roles: vec![user.role],
        })
    }
}
