use std::sync::Arc;

use crate::api::dto::{EmployeeRequest, EmployeeResponse};
use crate::database::models::{EmployeeField, NewEmployee};
use crate::database::pagination::{Page, PageRequest};
use crate::database::repository::EmployeeRepository;
use crate::database::DatabaseError;
use crate::services::ServiceError;

#[derive(Clone)]
pub struct EmployeeService {
    employees: Arc<dyn EmployeeRepository>,
}

fn not_found(id: i64) -> ServiceError {
    ServiceError::NotFound(format!("Employee not found for id :: {}", id))
}

fn on_write(email: &str) -> impl FnOnce(DatabaseError) -> ServiceError + '_ {
    move |err| match err {
        DatabaseError::Conflict(_) => {
            tracing::warn!("Employee email already in use: {}", email);
            ServiceError::Conflict(format!("Employee with email {} already exists", email))
        }
        other => other.into(),
    }
}

impl EmployeeService {
    pub fn new(employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees }
    }

    pub async fn get_all_employees(&self) -> Result<Vec<EmployeeResponse>, ServiceError> {
        tracing::info!("Fetching all employees");
        let rows = self.employees.find_all().await?;
        Ok(rows.into_iter().map(EmployeeResponse::from).collect())
    }

    pub async fn get_paginated_employees(
        &self,
        request: &PageRequest<EmployeeField>,
    ) -> Result<Page<EmployeeResponse>, ServiceError> {
        tracing::debug!(
            "Fetching paginated employees - page: {}, size: {}, sort: [{}]",
            request.page,
            request.size,
            request.sort_description()
        );
        let page = self.employees.find_page(request).await?;
        tracing::info!(
            "Retrieved {} employees for page {} of {}",
            page.content.len(),
            page.page_no + 1,
            page.total_pages
        );
        Ok(page.map(EmployeeResponse::from))
    }

    pub async fn save_employee(&self, request: EmployeeRequest) -> Result<EmployeeResponse, ServiceError> {
        tracing::debug!("Attempting to save employee: {}", request.email);
        let email = request.email.clone();
        let saved = self
            .employees
            .insert(request.into())
            .await
            .map_err(on_write(&email))?;
        tracing::info!("Employee saved successfully with ID: {}", saved.id);
        Ok(saved.into())
    }

    pub async fn get_employee_by_id(&self, id: i64) -> Result<EmployeeResponse, ServiceError> {
        tracing::debug!("Fetching employee by ID: {}", id);
        match self.employees.find_by_id(id).await? {
            Some(employee) => {
                tracing::info!("Employee found with ID: {}", id);
                Ok(employee.into())
            }
            None => {
                tracing::warn!("Employee not found for ID: {}", id);
                Err(not_found(id))
            }
        }
    }

    pub async fn update_employee(&self, id: i64, request: EmployeeRequest) -> Result<EmployeeResponse, ServiceError> {
        tracing::debug!("Attempting to update employee with ID: {}", id);
        let email = request.email.clone();
        let fields: NewEmployee = request.into();
        match self.employees.update(id, fields).await.map_err(on_write(&email))? {
            Some(updated) => {
                tracing::info!("Employee updated successfully with ID: {}", updated.id);
                Ok(updated.into())
            }
            None => {
                tracing::warn!("Employee not found for update with ID: {}", id);
                Err(not_found(id))
            }
        }
    }

    pub async fn delete_employee_by_id(&self, id: i64) -> Result<(), ServiceError> {
        tracing::debug!("Attempting to delete employee by ID: {}", id);
        if !self.employees.delete(id).await? {
            tracing::warn!("Attempted to delete non-existent employee with ID: {}", id);
            return Err(not_found(id));
        }
        tracing::info!("Employee deleted successfully with ID: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryEmployeeRepository;
    use crate::database::pagination::Direction;

    fn service() -> EmployeeService {
        EmployeeService::new(Arc::new(MemoryEmployeeRepository::new()))
    }

    fn request(first: &str, last: &str, email: &str) -> EmployeeRequest {
        EmployeeRequest {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn save_then_fetch_by_id() {
        let service = service();
        let saved = service.save_employee(request("Ada", "Lovelace", "ada@example.com")).await.unwrap();
        let fetched = service.get_employee_by_id(saved.id).await.unwrap();
        assert_eq!(fetched, saved);
    }

    #[tokio::test]
    async fn missing_employee_is_not_found() {
        let service = service();
        let err = service.get_employee_by_id(99).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Employee not found for id :: 99"));
        assert!(matches!(service.delete_employee_by_id(99).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(
            service.update_employee(99, request("A", "B", "a@example.com")).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let service = service();
        let saved = service.save_employee(request("Ada", "Lovelace", "ada@example.com")).await.unwrap();
        let updated = service
            .update_employee(saved.id, request("Augusta", "King", "augusta@example.com"))
            .await
            .unwrap();
        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.first_name, "Augusta");
        assert_eq!(updated.email, "augusta@example.com");
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let service = service();
        service.save_employee(request("Ada", "Lovelace", "ada@example.com")).await.unwrap();
        let err = service.save_employee(request("Other", "Person", "ada@example.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn delete_removes_from_listing() {
        let service = service();
        let a = service.save_employee(request("Ada", "Lovelace", "ada@example.com")).await.unwrap();
        service.save_employee(request("Alan", "Turing", "alan@example.com")).await.unwrap();
        service.delete_employee_by_id(a.id).await.unwrap();
        let all = service.get_all_employees().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].email, "alan@example.com");
    }

    #[tokio::test]
    async fn paginates_with_sort() {
        let service = service();
        for (last, email) in [("Turing", "t@example.com"), ("Hopper", "h@example.com"), ("Lovelace", "l@example.com")] {
            service.save_employee(request("X", last, email)).await.unwrap();
        }
        let page = service
            .get_paginated_employees(&PageRequest::new(0, 2).with_sort(EmployeeField::LastName, Direction::Asc))
            .await
            .unwrap();
        let last_names: Vec<&str> = page.content.iter().map(|e| e.last_name.as_str()).collect();
        assert_eq!(last_names, vec!["Hopper", "Lovelace"]);
        assert_eq!(page.total_elements, 3);
    }
}
