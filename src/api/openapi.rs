use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::api::dto::{
    EmployeeRequest, EmployeeResponse, JwtResponse, LoginRequest, PaginatedEmployeeResponse,
    UserRegistrationRequest, WhoAmIResponse,
};
use crate::error::ErrorDetails;
use crate::handlers::{protected, public};

/// OpenAPI document served at `/v3/api-docs`
#[derive(OpenApi)]
#[openapi(
    info(title = "Employee Management API"),
    paths(
        public::auth::login::login_post,
        public::auth::register::register_post,
        public::system::health,
        protected::auth::whoami::whoami_get,
        protected::employees::collection::employees_get,
        protected::employees::collection::employees_all_get,
        protected::employees::collection::employees_post,
        protected::employees::record::employee_get,
        protected::employees::record::employee_put,
        protected::employees::record::employee_delete,
    ),
    components(schemas(
        EmployeeRequest,
        EmployeeResponse,
        PaginatedEmployeeResponse,
        UserRegistrationRequest,
        LoginRequest,
        JwtResponse,
        WhoAmIResponse,
        ErrorDetails,
        public::system::HealthStatus,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Registration and token issue"),
        (name = "employees", description = "Employee records"),
        (name = "system", description = "Service health")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
