use actix_web::{web, HttpResponse};
use re_core::errors::DomainError;

use crate::app::AppState;
use crate::dto::{CreateDepositOrderRequest, EmailQuery, PageQuery};
use crate::handlers::{resolve_caller, ApiError};
use crate::middleware::AuthContext;

/// Handler for POST /api/v1/account/createDepositOrder (bearer, CUSTOMER)
///
/// ## Errors
/// - 400 Bad Request: missing or malformed `propertyId` / `depositAmount`
/// - 403 Forbidden: caller is not a customer
/// - 404 Not Found: property does not exist
pub async fn create_deposit_order(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<EmailQuery>,
    request: web::Json<CreateDepositOrderRequest>,
) -> Result<HttpResponse, ApiError> {
    let caller = resolve_caller(&auth, query.email.as_deref())?;
    let request = request.into_inner();
    let property_id = request
        .property_id
        .ok_or_else(|| DomainError::required("propertyId"))?;
    let amount = request
        .deposit_amount
        .ok_or_else(|| DomainError::required("depositAmount"))?;

    let order = state.deposits.create(&caller, &property_id, amount).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Deposit order created",
        "order": order,
    })))
}

/// Handler for GET /api/v1/account/getDepositOrders (bearer, MANAGER or EMPLOYEE)
///
/// Orders below the configured threshold, largest deposit first.
pub async fn get_deposit_orders(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let caller = resolve_caller(&auth, query.email.as_deref())?;
    let pagination = query.pagination(&state.ledger)?;

    let orders = state.deposits.list_filtered(&caller, pagination).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "orders": orders,
        "page": pagination.page,
        "limit": pagination.limit(),
    })))
}

/// Handler for GET /api/v1/account/getMyDepositOrder/{email} (bearer, CUSTOMER)
pub async fn get_my_deposit_orders(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let caller = resolve_caller(&auth, Some(path.as_str()))?;
    let pagination = query.pagination(&state.ledger)?;

    let orders = state.deposits.list_owned_by(&caller, pagination).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "orders": orders,
        "page": pagination.page,
        "limit": pagination.limit(),
    })))
}
