//! Integration tests for bearer-token authentication

mod common;

use actix_web::{http::StatusCode, test};
use re_api::create_app;
use re_core::domain::entities::{Account, Role};
use re_core::services::{TokenService, TokenServiceConfig};
use serde_json::Value;

use common::{bearer, register_customer, state, test_config};

fn issue_with(config: TokenServiceConfig, email: &str) -> String {
    let account = Account::new(email.to_string(), String::new(), Role::Customer);
    TokenService::new(config).issue(&account).unwrap().0
}

#[actix_web::test]
async fn test_expired_token_is_rejected() {
    let state = state();
    register_customer(&state, "c@x.com", "pw").await;
    let app = test::init_service(create_app(state)).await;

    let expired = issue_with(
        TokenServiceConfig {
            ttl_seconds: -120,
            ..TokenServiceConfig::from(&test_config().auth.jwt)
        },
        "c@x.com",
    );
    let req = test::TestRequest::get()
        .uri("/api/v1/account/getProfileDetails")
        .insert_header(bearer(&expired))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_EXPIRED");
}

#[actix_web::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let state = state();
    register_customer(&state, "c@x.com", "pw").await;
    let app = test::init_service(create_app(state)).await;

    let forged = issue_with(
        TokenServiceConfig {
            jwt_secret: "some-other-secret-that-is-long-enough".to_string(),
            ..TokenServiceConfig::from(&test_config().auth.jwt)
        },
        "c@x.com",
    );
    let req = test::TestRequest::get()
        .uri("/api/v1/account/getProfileDetails")
        .insert_header(bearer(&forged))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_INVALID");
}

#[actix_web::test]
async fn test_valid_token_for_deleted_identity_is_not_found() {
    let state = state();
    let app = test::init_service(create_app(state)).await;

    let orphan = issue_with(TokenServiceConfig::from(&test_config().auth.jwt), "gone@x.com");
    let req = test::TestRequest::get()
        .uri("/api/v1/account/getProfileDetails")
        .insert_header(bearer(&orphan))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_public_routes_ignore_missing_token() {
    let state = state();
    register_customer(&state, "c@x.com", "pw").await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/account/getProfile?email=c@x.com")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}
