//! Integration tests for registration, login and profile routes

mod common;

use actix_web::{http::StatusCode, test};
use re_api::create_app;
use serde_json::{json, Value};

use common::{bearer, customer_body, register_customer, register_manager, state, token};

#[actix_web::test]
async fn test_register_login_and_profile_scenario() {
    let app = test::init_service(create_app(state())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/account/register")
        .set_json(customer_body("a@x.com", "pw1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["account"], json!({"email": "a@x.com", "role": "CUSTOMER"}));

    let req = test::TestRequest::post()
        .uri("/api/v1/account/login")
        .set_json(json!({"email": "a@x.com", "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_CREDENTIALS");

    let req = test::TestRequest::post()
        .uri("/api/v1/account/login")
        .set_json(json!({"email": "a@x.com", "password": "pw1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["account"]["role"], "CUSTOMER");

    let req = test::TestRequest::get()
        .uri("/api/v1/account/getProfile?email=a@x.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"email": "a@x.com", "role": "CUSTOMER"}));
}

#[actix_web::test]
async fn test_register_rejects_duplicates_and_employee_role() {
    let app = test::init_service(create_app(state())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/account/register")
        .set_json(customer_body("dup@x.com", "pw"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/account/register")
        .set_json(customer_body("DUP@x.com", "pw"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "EMAIL_ALREADY_REGISTERED");

    let mut employee = customer_body("e@x.com", "pw");
    employee["role"] = json!("EMPLOYEE");
    let req = test::TestRequest::post()
        .uri("/api/v1/account/register")
        .set_json(employee)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_register_reports_missing_fields() {
    let app = test::init_service(create_app(state())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/account/register")
        .set_json(json!({"password": "pw"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "REQUIRED_FIELD");
    assert!(body["timestamp"].is_string());

    let req = test::TestRequest::post()
        .uri("/api/v1/account/register")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_register_rejects_overlong_password() {
    let app = test::init_service(create_app(state())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/account/register")
        .set_json(customer_body("a@x.com", &"p".repeat(73)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("password"));
}

#[actix_web::test]
async fn test_login_unknown_and_inactive_accounts() {
    let app = test::init_service(create_app(state())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/account/login")
        .set_json(json!({"email": "ghost@x.com", "password": "pw"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let mut inactive = customer_body("off@x.com", "pw");
    inactive["isActive"] = json!(false);
    let req = test::TestRequest::post()
        .uri("/api/v1/account/register")
        .set_json(inactive)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/account/login")
        .set_json(json!({"email": "off@x.com", "password": "pw"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ACCOUNT_INACTIVE");

    let req = test::TestRequest::post()
        .uri("/api/v1/account/login")
        .set_json(json!({"email": "off@x.com"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_get_profile_requires_known_email() {
    let app = test::init_service(create_app(state())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/account/getProfile?email=nobody@x.com")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/v1/account/getProfile")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_profile_details_require_matching_bearer() {
    let state = state();
    register_customer(&state, "c@x.com", "pw").await;
    register_customer(&state, "other@x.com", "pw").await;
    let token = token(&state, "c@x.com", "pw").await;
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/account/getProfileDetails?email=c@x.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_MISSING");

    let req = test::TestRequest::get()
        .uri("/api/v1/account/getProfileDetails?email=c@x.com")
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_INVALID");

    let req = test::TestRequest::get()
        .uri("/api/v1/account/getProfileDetails?email=other@x.com")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "IDENTITY_MISMATCH");

    let req = test::TestRequest::get()
        .uri("/api/v1/account/getProfileDetails?email=c@x.com")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "c@x.com");
    assert_eq!(body["role"], "CUSTOMER");
    assert_eq!(body["isActive"], true);
    assert_eq!(body["profile"]["address"], "2 Beach Rd");
}

#[actix_web::test]
async fn test_create_profile_updates_contact() {
    let state = state();
    register_customer(&state, "c@x.com", "pw").await;
    let token = token(&state, "c@x.com", "pw").await;
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/account/createProfile?email=c@x.com")
        .insert_header(bearer(&token))
        .set_json(json!({"name": "Carol New", "phone": "0499999999", "address": "9 Hill Ave"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["profile"]["name"], "Carol New");
    assert_eq!(body["profile"]["address"], "9 Hill Ave");

    let req = test::TestRequest::post()
        .uri("/api/v1/account/createProfile")
        .insert_header(bearer(&token))
        .set_json(json!({"name": "  ", "phone": "0499999999"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_only_managers_create_employees() {
    let state = state();
    register_manager(&state, "m@x.com", "pw").await;
    register_customer(&state, "c@x.com", "pw").await;
    let manager_token = token(&state, "m@x.com", "pw").await;
    let customer_token = token(&state, "c@x.com", "pw").await;
    let app = test::init_service(create_app(state.clone())).await;

    let employee = json!({
        "employeeEmail": "e@x.com",
        "password": "pw",
        "name": "Eve",
        "phone": "0400000003",
        "department": "Sales"
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/account/createEmployee?email=c@x.com")
        .insert_header(bearer(&customer_token))
        .set_json(employee.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INSUFFICIENT_ROLE");

    let req = test::TestRequest::post()
        .uri("/api/v1/account/createEmployee?email=m@x.com")
        .insert_header(bearer(&manager_token))
        .set_json(employee.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["account"], json!({"email": "e@x.com", "role": "EMPLOYEE"}));
    assert_eq!(body["employee"]["department"], "Sales");
    assert!(body["employee"]["managerId"].is_string());

    let req = test::TestRequest::post()
        .uri("/api/v1/account/createEmployee")
        .insert_header(bearer(&manager_token))
        .set_json(employee)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::post()
        .uri("/api/v1/account/login")
        .set_json(json!({"email": "e@x.com", "password": "pw"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_health_and_unknown_routes() {
    let app = test::init_service(create_app(state())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");

    let req = test::TestRequest::get().uri("/api/v1/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}
