use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::util::ServiceExt; // for `oneshot`

use ems::AppState;
use ems::api;

fn setup_test_app() -> Router {
    api::api_router(AppState::new())
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

#[tokio::test]
async fn test_department_not_found_responses() {
    let app = setup_test_app();

    // GET
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/departments/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "Department 999 not found");

    // PUT
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/departments/999",
            serde_json::json!({ "name": "google" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // DELETE
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/departments/999")
                .method("DELETE")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Employees of a missing department
    let response = app
        .oneshot(
            Request::builder()
                .uri("/departments/999/employees")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_employee_not_found_responses() {
    let app = setup_test_app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/departments",
            serde_json::json!({ "name": "google" }),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/employees/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Employee 999 not found");

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/employees/999",
            serde_json::json!({ "department_id": 1, "name": "akhil" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/employees/999")
                .method("DELETE")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_employee_with_missing_department_is_bad_request() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/employees",
            serde_json::json!({ "department_id": 123, "name": "akhil" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], 400);
    assert_eq!(body["message"], "Department 123 not exists");

    // The failed create must not have consumed an employee ID
    app.clone()
        .oneshot(json_request(
            "POST",
            "/departments",
            serde_json::json!({ "name": "google" }),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "POST",
            "/employees",
            serde_json::json!({ "department_id": 1, "name": "akhil" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["id"], 1);
}

#[tokio::test]
async fn test_update_employee_with_missing_department_is_bad_request() {
    let app = setup_test_app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/departments",
            serde_json::json!({ "name": "google" }),
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_request(
            "POST",
            "/employees",
            serde_json::json!({ "department_id": 1, "name": "akhil" }),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/employees/1",
            serde_json::json!({ "department_id": 123, "name": "mahesh" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Department 123 not exists");
}

#[tokio::test]
async fn test_list_employees_with_unknown_attribute() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/employees?value=email")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    // Intentionally 404 rather than 400
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Unidentified Attribute");
}

#[tokio::test]
async fn test_age_sort_with_ageless_employee_is_internal_error() {
    let app = setup_test_app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/departments",
            serde_json::json!({ "name": "google" }),
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_request(
            "POST",
            "/employees",
            serde_json::json!({ "department_id": 1, "name": "akhil" }),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/employees?value=age")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_validation_failures_are_unprocessable() {
    let app = setup_test_app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/departments",
            serde_json::json!({ "name": "google" }),
        ))
        .await
        .unwrap();

    // Empty department name
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/departments",
            serde_json::json!({ "name": "" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Empty employee name
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/employees",
            serde_json::json!({ "department_id": 1, "name": "" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Malformed email
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/employees",
            serde_json::json!({ "department_id": 1, "name": "akhil", "email": "not-an-email" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Non-positive age
    let response = app
        .oneshot(json_request(
            "POST",
            "/employees",
            serde_json::json!({ "department_id": 1, "name": "akhil", "age": 0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_employee_invalid_json() {
    let app = setup_test_app();

    let req = Request::builder()
        .uri("/employees")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("invalid json"))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    // Axum's Json extractor returns 400 for malformed JSON
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_employee_without_department_field() {
    let app = setup_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/employees",
            serde_json::json!({ "name": "akhil" }),
        ))
        .await
        .unwrap();
    // Axum's Json extractor rejects a payload missing a required field
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
