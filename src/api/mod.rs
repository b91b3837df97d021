pub mod department;
pub mod employee;
pub mod health;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Departments
        .route(
            "/departments",
            get(department::list_departments).post(department::create_department),
        )
        .route(
            "/departments/:id",
            get(department::get_department)
                .put(department::update_department)
                .delete(department::delete_department),
        )
        .route(
            "/departments/:id/employees",
            get(department::list_department_employees),
        )
        // Employees
        .route(
            "/employees",
            get(employee::list_employees).post(employee::create_employee),
        )
        .route(
            "/employees/:id",
            get(employee::get_employee)
                .put(employee::update_employee)
                .delete(employee::delete_employee),
        )
        .with_state(state)
}
