use axum::extract::{rejection::PathRejection, Path, State};

use crate::api::dto::{EmployeeRequest, EmployeeResponse};
use crate::middleware::{ApiResponse, ApiResult, ValidatedJson};
use crate::state::AppState;

use super::employee_id;

/// GET /api/employees/:id - Fetch a single employee
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 400, description = "Id is not a number", body = crate::error::ErrorDetails),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorDetails),
        (status = 404, description = "No employee with this id", body = crate::error::ErrorDetails)
    ),
    security(("bearer_auth" = [])),
    tag = "employees"
)]
pub async fn employee_get(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<EmployeeResponse> {
    let id = employee_id(path)?;
    let employee = state.employees.get_employee_by_id(id).await?;
    Ok(ApiResponse::success(employee))
}

/// PUT /api/employees/:id - Replace every field of an employee
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(("id" = i64, Path, description = "Employee id")),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Invalid id or request body", body = crate::error::ErrorDetails),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorDetails),
        (status = 404, description = "No employee with this id", body = crate::error::ErrorDetails),
        (status = 409, description = "Email already in use", body = crate::error::ErrorDetails)
    ),
    security(("bearer_auth" = [])),
    tag = "employees"
)]
pub async fn employee_put(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    ValidatedJson(request): ValidatedJson<EmployeeRequest>,
) -> ApiResult<EmployeeResponse> {
    let id = employee_id(path)?;
    let updated = state.employees.update_employee(id, request).await?;
    Ok(ApiResponse::success(updated))
}

/// DELETE /api/employees/:id - Remove an employee
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 400, description = "Id is not a number", body = crate::error::ErrorDetails),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorDetails),
        (status = 404, description = "No employee with this id", body = crate::error::ErrorDetails)
    ),
    security(("bearer_auth" = [])),
    tag = "employees"
)]
pub async fn employee_delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<()> {
    let id = employee_id(path)?;
    state.employees.delete_employee_by_id(id).await?;
    Ok(ApiResponse::no_content())
}
