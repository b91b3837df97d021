use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::department::list_departments,
        api::department::create_department,
        api::department::get_department,
        api::department::update_department,
        api::department::delete_department,
        api::department::list_department_employees,
        api::employee::list_employees,
        api::employee::create_employee,
        api::employee::get_employee,
        api::employee::update_employee,
        api::employee::delete_employee,
    ),
    components(
        schemas(
            crate::models::Department,
            crate::models::Employee,
            crate::models::NewEmployee,
            api::department::DepartmentPayload,
        )
    ),
    tags(
        (name = "ems", description = "Employee Management API")
    )
)]
pub struct ApiDoc;
