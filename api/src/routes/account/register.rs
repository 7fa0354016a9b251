use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::RegisterRequest;
use crate::handlers::ApiError;

/// Handler for POST /api/v1/account/register
///
/// Creates a CUSTOMER (default) or MANAGER account with its role profile.
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "message": "Account registered", "account": { "email": "a@x.com", "role": "CUSTOMER" } }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing or malformed fields, or role EMPLOYEE
/// - 409 Conflict: email already registered
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    let account = state.accounts.register(request.into()).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Account registered",
        "account": account,
    })))
}
