use actix_web::{web, HttpResponse};
use re_core::errors::DomainError;
use re_shared::validation::not_blank;
use validator::Validate;

use crate::app::AppState;
use crate::dto::{EmailQuery, ProfileRequest};
use crate::handlers::{resolve_caller, ApiError};
use crate::middleware::AuthContext;

/// Handler for GET /api/v1/account/getProfile?email=
///
/// Public lookup returning only `{email, role}`.
pub async fn get_profile(
    state: web::Data<AppState>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, ApiError> {
    let email = query
        .email
        .as_deref()
        .filter(|email| not_blank(email))
        .ok_or_else(|| DomainError::required("email"))?;

    let summary = state.accounts.get_profile(email).await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// Handler for GET /api/v1/account/getProfileDetails (bearer)
pub async fn get_profile_details(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, ApiError> {
    let caller = resolve_caller(&auth, query.email.as_deref())?;

    let details = state.accounts.get_profile_details(&caller).await?;
    Ok(HttpResponse::Ok().json(details))
}

/// Handler for POST /api/v1/account/createProfile (bearer)
///
/// Updates name and phone on the caller's role profile, plus the address
/// for customers.
pub async fn create_profile(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<EmailQuery>,
    request: web::Json<ProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    let caller = resolve_caller(&auth, query.email.as_deref())?;
    let request = request.into_inner();
    request.validate()?;

    let profile = state.accounts.set_profile(&caller, request.into()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Profile updated",
        "profile": profile,
    })))
}
