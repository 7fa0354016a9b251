//! Shared fixtures for the HTTP integration tests.
//!
//! Setup goes through the services directly; the behaviour under test goes
//! through the HTTP app built by `create_app`.

#![allow(dead_code)]

use actix_web::web;
use re_api::AppState;
use re_core::services::{CreateEmployeeInput, RegisterInput};
use re_shared::AppConfig;
use serde_json::{json, Value};

pub const BOUNDARY: &str = "----estate-office-test-boundary";

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.bcrypt_cost = 4;
    config
}

pub fn state() -> web::Data<AppState> {
    web::Data::new(AppState::in_memory(&test_config()))
}

pub fn customer_body(email: &str, password: &str) -> Value {
    json!({
        "email": email,
        "password": password,
        "role": "CUSTOMER",
        "name": "Alice",
        "phone": "0400000000",
        "address": "1 Harbour St"
    })
}

pub async fn register_customer(state: &AppState, email: &str, password: &str) {
    state
        .accounts
        .register(RegisterInput {
            email: email.to_string(),
            password: password.to_string(),
            role: Some("CUSTOMER".to_string()),
            name: Some("Carol Customer".to_string()),
            phone: Some("0400000001".to_string()),
            address: Some("2 Beach Rd".to_string()),
            ..RegisterInput::default()
        })
        .await
        .expect("customer registration");
}

pub async fn register_manager(state: &AppState, email: &str, password: &str) {
    state
        .accounts
        .register(RegisterInput {
            email: email.to_string(),
            password: password.to_string(),
            role: Some("MANAGER".to_string()),
            name: Some("Mia Manager".to_string()),
            phone: Some("0400000002".to_string()),
            department: Some("Sales".to_string()),
            ..RegisterInput::default()
        })
        .await
        .expect("manager registration");
}

pub async fn create_employee(state: &AppState, manager: &str, email: &str, password: &str) {
    state
        .accounts
        .create_employee(
            manager,
            CreateEmployeeInput {
                email: email.to_string(),
                password: password.to_string(),
                name: Some("Eve Employee".to_string()),
                phone: Some("0400000003".to_string()),
                department: Some("Sales".to_string()),
                ..CreateEmployeeInput::default()
            },
        )
        .await
        .expect("employee creation");
}

pub async fn token(state: &AppState, email: &str, password: &str) -> String {
    state
        .accounts
        .authenticate(email, password)
        .await
        .expect("login")
        .token
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Build a `multipart/form-data` body from text fields and an optional image
pub fn multipart(fields: &[(&str, &str)], image: Option<&[u8]>) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }
    if let Some(bytes) = image {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"front.png\"\r\nContent-Type: image/png\r\n\r\n",
                BOUNDARY
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    (format!("multipart/form-data; boundary={}", BOUNDARY), body)
}
