// Employee CRUD:
//   GET    /api/employees        paginated listing
//   GET    /api/employees/all    full listing
//   POST   /api/employees        create
//   GET    /api/employees/:id    fetch
//   PUT    /api/employees/:id    replace
//   DELETE /api/employees/:id    remove
pub mod collection;
pub mod record;

pub use collection::{employees_all_get, employees_get, employees_post};
pub use record::{employee_delete, employee_get, employee_put};

use axum::extract::{rejection::PathRejection, Path};

use crate::error::ApiError;

/// Non-numeric ids are a 400, not a 404
pub(crate) fn employee_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::warn!("Invalid employee id: {}", rejection.body_text());
        ApiError::bad_request(rejection.body_text())
    })
}
