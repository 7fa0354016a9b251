//! Integration tests for deposit-order routes

mod common;

use actix_web::{http::StatusCode, test, web};
use re_api::{create_app, AppState};
use re_core::domain::entities::PropertyStatus;
use re_core::services::{ImageUpload, NewProperty};
use serde_json::{json, Value};

use common::{bearer, create_employee, register_customer, register_manager, state, token};

/// Employee-owned property; returns its id
async fn listed_property(state: &AppState, owner: &str, price: i64) -> String {
    let property = state
        .properties
        .create(
            owner,
            NewProperty {
                address: "5 Dune St".to_string(),
                price,
                area: 70.0,
                status: Some(PropertyStatus::Listed),
                image: Some(ImageUpload::new("dune.png", None, vec![1, 2, 3])),
            },
        )
        .await
        .expect("property creation");
    property.id.to_string()
}

struct Office {
    state: web::Data<AppState>,
    property_id: String,
    customer: String,
    employee: String,
}

async fn office() -> Office {
    let state = state();
    register_manager(&state, "m@x.com", "pw").await;
    create_employee(&state, "m@x.com", "e@x.com", "pw").await;
    register_customer(&state, "c@x.com", "pw").await;
    let property_id = listed_property(&state, "e@x.com", 90_000_000).await;
    let customer = token(&state, "c@x.com", "pw").await;
    let employee = token(&state, "e@x.com", "pw").await;
    Office {
        state,
        property_id,
        customer,
        employee,
    }
}

#[actix_web::test]
async fn test_customer_books_pending_deposit() {
    let office = office().await;
    let app = test::init_service(create_app(office.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/account/createDepositOrder?email=c@x.com")
        .insert_header(bearer(&office.customer))
        .set_json(json!({"propertyId": office.property_id, "depositAmount": 1_000_000}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["order"]["status"], "PENDING");
    assert_eq!(body["order"]["depositAmount"], 1_000_000);
    assert_eq!(body["order"]["propertyId"], office.property_id.as_str());
    assert!(body["order"]["createdAt"].is_string());
}

#[actix_web::test]
async fn test_create_deposit_rejections() {
    let office = office().await;
    let app = test::init_service(create_app(office.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/account/createDepositOrder")
        .insert_header(bearer(&office.employee))
        .set_json(json!({"propertyId": office.property_id, "depositAmount": 10}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri("/api/v1/account/createDepositOrder")
        .insert_header(bearer(&office.customer))
        .set_json(json!({
            "propertyId": "1b4e28ba-2fa1-11d2-883f-0016d3cca427",
            "depositAmount": 10
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/v1/account/createDepositOrder")
        .insert_header(bearer(&office.customer))
        .set_json(json!({"propertyId": office.property_id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "REQUIRED_FIELD");

    let req = test::TestRequest::post()
        .uri("/api/v1/account/createDepositOrder")
        .insert_header(bearer(&office.customer))
        .set_json(json!({"propertyId": office.property_id, "depositAmount": 0}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_staff_listing_filters_below_threshold() {
    let office = office().await;
    for amount in [50_000_000, 1_000, 44_999_999, 45_000_000, 20_000] {
        office
            .state
            .deposits
            .create("c@x.com", &office.property_id, amount)
            .await
            .unwrap();
    }
    let app = test::init_service(create_app(office.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/account/getDepositOrders?email=e@x.com")
        .insert_header(bearer(&office.employee))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let amounts: Vec<i64> = body["orders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["depositAmount"].as_i64().unwrap())
        .collect();
    assert_eq!(amounts, vec![44_999_999, 20_000, 1_000]);
    assert_eq!(body["orders"][0]["customer"]["name"], "Carol Customer");
    assert_eq!(body["orders"][0]["customer"]["email"], "c@x.com");

    let req = test::TestRequest::get()
        .uri("/api/v1/account/getDepositOrders?page=2&limit=2")
        .insert_header(bearer(&office.employee))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["orders"].as_array().unwrap().len(), 1);
    assert_eq!(body["orders"][0]["depositAmount"], 1_000);
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 2);

    let req = test::TestRequest::get()
        .uri("/api/v1/account/getDepositOrders")
        .insert_header(bearer(&office.customer))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_customer_orders_are_enriched() {
    let office = office().await;
    office
        .state
        .deposits
        .create("c@x.com", &office.property_id, 5_000)
        .await
        .unwrap();
    let app = test::init_service(create_app(office.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/account/getMyDepositOrder/c@x.com")
        .insert_header(bearer(&office.customer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let order = &body["orders"][0];
    assert_eq!(order["depositAmount"], 5_000);
    assert_eq!(order["property"]["id"], office.property_id.as_str());
    assert_eq!(order["owner"]["email"], "e@x.com");
    assert_eq!(order["owner"]["name"], "Eve Employee");

    let req = test::TestRequest::get()
        .uri("/api/v1/account/getMyDepositOrder/m@x.com")
        .insert_header(bearer(&office.customer))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_employee_cannot_list_customer_orders() {
    let office = office().await;
    let app = test::init_service(create_app(office.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/account/getMyDepositOrder/e@x.com")
        .insert_header(bearer(&office.employee))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INSUFFICIENT_ROLE");
}
