// Request and response bodies. Field names are camelCase on the wire.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::database::models::{Employee, NewEmployee};
use crate::database::pagination::Page;
use crate::validation::{
    validate_email, validate_min_len, validate_not_blank, Validate, ValidationErrors, PASSWORD_MIN_LEN,
};

/// Explicit `null` reads as an empty string, same as a missing field
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Missing or null fields deserialize as empty strings so they surface as validation errors
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

impl Validate for EmployeeRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validate_not_blank("firstName", &self.first_name, "First name is required"));
        errors.check(validate_not_blank("lastName", &self.last_name, "Last name is required"));
        errors.check(validate_not_blank("email", &self.email, "Email is required"));
        errors.check(validate_email("email", &self.email, "Invalid email format"));
        errors.into_result()
    }
}

impl From<EmployeeRequest> for NewEmployee {
    fn from(request: EmployeeRequest) -> Self {
        NewEmployee {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistrationRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub password: String,
}

impl Validate for UserRegistrationRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validate_not_blank("firstName", &self.first_name, "First name is required"));
        errors.check(validate_not_blank("lastName", &self.last_name, "Last name is required"));
        errors.check(validate_not_blank("email", &self.email, "Email is required"));
        errors.check(validate_email("email", &self.email, "Invalid email format"));
        errors.check(validate_not_blank("password", &self.password, "Password is required"));
        errors.check(validate_min_len(
            "password",
            &self.password,
            PASSWORD_MIN_LEN,
            "Password must be at least 6 characters long",
        ));
        errors.into_result()
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validate_not_blank("email", &self.email, "Email cannot be empty"));
        errors.check(validate_email("email", &self.email, "Invalid email format"));
        errors.check(validate_not_blank("password", &self.password, "Password cannot be empty"));
        errors.into_result()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JwtResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
}

impl JwtResponse {
    pub fn bearer(token: String) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WhoAmIResponse {
    pub id: i64,
    pub email: String,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[aliases(PaginatedEmployeeResponse = PaginatedResponse<EmployeeResponse>)]
pub struct PaginatedResponse<T> {
    pub content: Vec<T>,
    pub page_no: u32,
    pub page_size: u32,
    pub total_elements: i64,
    pub total_pages: i64,
    pub last: bool,
}

impl<T> From<Page<T>> for PaginatedResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            content: page.content,
            page_no: page.page_no,
            page_size: page.page_size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
            last: page.last,
        }
    }
}
