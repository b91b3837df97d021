use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::domain::{RegistryError, validation};
use crate::infrastructure::AppState;
use crate::models::NewEmployee;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListEmployeesQuery {
    /// Sort attribute: "age" or "name". Empty or absent for map order.
    #[serde(default)]
    pub value: String,
}

#[utoipa::path(
    get,
    path = "/api/employees",
    params(ListEmployeesQuery),
    responses(
        (status = 200, description = "All employees, optionally sorted", body = Vec<crate::models::Employee>),
        (status = 404, description = "Unidentified sort attribute")
    )
)]
pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<ListEmployeesQuery>,
) -> impl IntoResponse {
    match state.employees.list_all(&query.value) {
        Ok(employees) => (StatusCode::OK, Json(employees)).into_response(),
        Err(RegistryError::UnknownSortAttribute(_)) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "code": 404, "message": "Unidentified Attribute" })),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "code": 500, "message": "Internal Server Error" })),
        )
            .into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created", body = crate::models::Employee),
        (status = 400, description = "Referenced department does not exist"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<NewEmployee>,
) -> impl IntoResponse {
    if let Err(err) = validation::validate_employee(&payload) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "code": 422, "message": err.to_string() })),
        )
            .into_response();
    }

    match state.employees.create(payload) {
        Ok(employee) => (StatusCode::CREATED, Json(employee)).into_response(),
        Err(RegistryError::DepartmentNotFound(department_id)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "code": 400, "message": format!("Department {} not exists", department_id) })),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "code": 500, "message": "Internal Server Error" })),
        )
            .into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee found", body = crate::models::Employee),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.employees.get(id) {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "code": 404, "message": format!("Employee {} not found", id) })),
        )
            .into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(("id" = i32, Path, description = "Employee ID")),
    request_body = NewEmployee,
    responses(
        (status = 200, description = "Employee updated", body = crate::models::Employee),
        (status = 400, description = "Referenced department does not exist"),
        (status = 404, description = "Employee not found"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<NewEmployee>,
) -> impl IntoResponse {
    if let Err(err) = validation::validate_employee(&payload) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "code": 422, "message": err.to_string() })),
        )
            .into_response();
    }

    match state.employees.update(id, payload) {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(RegistryError::EmployeeNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "code": 404, "message": format!("Employee {} not found", id) })),
        )
            .into_response(),
        Err(RegistryError::DepartmentNotFound(department_id)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "code": 400, "message": format!("Department {} not exists", department_id) })),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "code": 500, "message": "Internal Server Error" })),
        )
            .into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.employees.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "code": 404, "message": format!("Employee {} not found", id) })),
        )
            .into_response(),
    }
}
