use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{RegistryError, validation};
use crate::infrastructure::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct DepartmentPayload {
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/departments",
    responses(
        (status = 200, description = "All departments", body = Vec<crate::models::Department>)
    )
)]
pub async fn list_departments(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.departments.list())).into_response()
}

#[utoipa::path(
    post,
    path = "/api/departments",
    request_body = DepartmentPayload,
    responses(
        (status = 201, description = "Department created", body = crate::models::Department),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_department(
    State(state): State<AppState>,
    Json(payload): Json<DepartmentPayload>,
) -> impl IntoResponse {
    if let Err(err) = validation::validate_department_name(&payload.name) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "code": 422, "message": err.to_string() })),
        )
            .into_response();
    }

    let department = state.departments.create(payload.name);
    (StatusCode::CREATED, Json(department)).into_response()
}

#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Department found", body = crate::models::Department),
        (status = 404, description = "Department not found")
    )
)]
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.departments.get(id) {
        Ok(department) => (StatusCode::OK, Json(department)).into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "code": 404, "message": format!("Department {} not found", id) })),
        )
            .into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    params(("id" = i32, Path, description = "Department ID")),
    request_body = DepartmentPayload,
    responses(
        (status = 200, description = "Department updated", body = crate::models::Department),
        (status = 404, description = "Department not found"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<DepartmentPayload>,
) -> impl IntoResponse {
    if let Err(err) = validation::validate_department_name(&payload.name) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "code": 422, "message": err.to_string() })),
        )
            .into_response();
    }

    match state.departments.update(id, payload.name) {
        Ok(department) => (StatusCode::OK, Json(department)).into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "code": 404, "message": format!("Department {} not found", id) })),
        )
            .into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 204, description = "Department and its employees deleted"),
        (status = 404, description = "Department not found")
    )
)]
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.departments.remove(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "code": 404, "message": format!("Department {} not found", id) })),
        )
            .into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/departments/{id}/employees",
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Employees of the department", body = Vec<crate::models::Employee>),
        (status = 404, description = "Department not found")
    )
)]
pub async fn list_department_employees(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.departments.employees_of(id) {
        Ok(employees) => (StatusCode::OK, Json(employees)).into_response(),
        Err(RegistryError::DepartmentNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "code": 404, "message": format!("Department {} not found", id) })),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "code": 500, "message": "Internal Server Error" })),
        )
            .into_response(),
    }
}
