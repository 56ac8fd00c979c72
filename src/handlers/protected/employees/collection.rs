use axum::extract::{rejection::QueryRejection, Query, State};

use crate::api::dto::{EmployeeRequest, EmployeeResponse, PaginatedResponse};
use crate::database::models::EmployeeField;
use crate::database::pagination::PageRequest;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, ValidatedJson};
use crate::state::AppState;

/// GET /api/employees - One page of employees
///
/// Query: `page` (0-based), `size`, and repeatable `sort=property[,property...][,asc|desc]`.
#[utoipa::path(
    get,
    path = "/api/employees",
    params(
        ("page" = Option<u32>, Query, description = "Zero-based page index"),
        ("size" = Option<u32>, Query, description = "Page size, clamped to the configured maximum"),
        ("sort" = Option<String>, Query, description = "Sort property list with optional direction, e.g. lastName,desc")
    ),
    responses(
        (status = 200, description = "Page of employees", body = crate::api::dto::PaginatedEmployeeResponse),
        (status = 400, description = "Invalid paging parameters", body = crate::error::ErrorDetails),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorDetails)
    ),
    security(("bearer_auth" = [])),
    tag = "employees"
)]
pub async fn employees_get(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<PaginatedResponse<EmployeeResponse>> {
    let Query(pairs) = query.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let request = PageRequest::<EmployeeField>::from_query(&pairs, &state.config.pagination)?;

    let page = state.employees.get_paginated_employees(&request).await?;
    Ok(ApiResponse::success(page.into()))
}

/// GET /api/employees/all - Every employee, unpaged
#[utoipa::path(
    get,
    path = "/api/employees/all",
    responses(
        (status = 200, description = "All employees", body = [EmployeeResponse]),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorDetails)
    ),
    security(("bearer_auth" = [])),
    tag = "employees"
)]
pub async fn employees_all_get(State(state): State<AppState>) -> ApiResult<Vec<EmployeeResponse>> {
    let employees = state.employees.get_all_employees().await?;
    Ok(ApiResponse::success(employees))
}

/// POST /api/employees - Create an employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Invalid request body", body = crate::error::ErrorDetails),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorDetails),
        (status = 409, description = "Email already in use", body = crate::error::ErrorDetails)
    ),
    security(("bearer_auth" = [])),
    tag = "employees"
)]
pub async fn employees_post(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EmployeeRequest>,
) -> ApiResult<EmployeeResponse> {
    let saved = state.employees.save_employee(request).await?;
    Ok(ApiResponse::created(saved))
}
