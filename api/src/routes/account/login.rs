use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::LoginRequest;
use crate::handlers::ApiError;

/// Handler for POST /api/v1/account/login
///
/// Verifies the password and issues a bearer token.
///
/// ## Errors
/// - 400 Bad Request: email or password missing
/// - 404 Not Found: unknown email
/// - 401 Unauthorized: wrong password
/// - 403 Forbidden: account inactive
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    let session = state
        .accounts
        .authenticate(
            request.email.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Login successful",
        "token": session.token,
        "expiresIn": session.expires_in,
        "account": session.account,
    })))
}
